use std::collections::HashSet;

use sea_orm::{prelude::*, QuerySelect};

use crate::schema;


fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' | 'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'Å' => 'a',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' | 'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
        'ñ' | 'Ñ' => 'n',
        'ç' | 'Ç' => 'c',
        c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
        _ => return None,
    };
    Some(folded)
}

/// Lowercase ASCII slug: alphanumeric runs joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        match fold_char(c) {
            Some(c) => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c);
            },
            None => pending_dash = true,
        }
    }

    if slug.is_empty() {
        "tournament".to_string()
    }
    else {
        slug
    }
}

/// Picks the first free slug out of `base`, `base-1`, `base-2`, ...
///
/// Trashed tournaments keep their slug, so they are taken into account.
/// `exclude_id` ignores the slug of the tournament being renamed.
pub async fn unique_slug<C>(db: &C, name: &str, exclude_id: Option<i32>) -> Result<String, DbErr> where C: ConnectionTrait {
    let base = slugify(name);

    let mut query = schema::tournament::Entity::find()
        .select_only()
        .column(schema::tournament::Column::Slug)
        .filter(
            schema::tournament::Column::Slug.eq(base.as_str())
                .or(schema::tournament::Column::Slug.like(format!("{}-%", base).as_str()))
        );
    if let Some(exclude_id) = exclude_id {
        query = query.filter(schema::tournament::Column::Id.ne(exclude_id));
    }
    let taken: HashSet<String> = query.into_tuple::<String>().all(db).await?.into_iter().collect();

    if !taken.contains(&base) {
        return Ok(base);
    }

    let mut suffix = 1;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken.contains(&candidate) {
            return Ok(candidate);
        }
        suffix += 1;
    }
}

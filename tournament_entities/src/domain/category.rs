use sea_orm::prelude::*;
use serde::{Serialize, Deserialize};

use crate::schema;



/// A competition class (age, grade and gender division), shared between tournaments.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: i32,
    pub name: Option<String>,
    pub alias: Option<String>,
    /// `M`, `F` or `X`
    pub gender: String,
    pub is_team: bool,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub grade_min: Option<i32>,
    pub grade_max: Option<i32>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub gender: String,
    pub is_team: bool,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub grade_min: Option<i32>,
    pub grade_max: Option<i32>,
}

impl Category {
    pub fn from_model(model: schema::category::Model) -> Self {
        Category {
            id: model.id,
            name: model.name,
            alias: model.alias,
            gender: model.gender,
            is_team: model.is_team,
            age_min: model.age_min,
            age_max: model.age_max,
            grade_min: model.grade_min,
            grade_max: model.grade_max,
        }
    }

    pub async fn create<C>(db: &C, category: NewCategory) -> Result<Category, DbErr> where C: ConnectionTrait {
        let model = schema::category::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: sea_orm::ActiveValue::Set(category.name),
            alias: sea_orm::ActiveValue::Set(category.alias),
            gender: sea_orm::ActiveValue::Set(category.gender),
            is_team: sea_orm::ActiveValue::Set(category.is_team),
            age_min: sea_orm::ActiveValue::Set(category.age_min),
            age_max: sea_orm::ActiveValue::Set(category.age_max),
            grade_min: sea_orm::ActiveValue::Set(category.grade_min),
            grade_max: sea_orm::ActiveValue::Set(category.grade_max),
        }.insert(db).await?;

        Ok(Self::from_model(model))
    }

    pub fn gender_label(&self) -> &str {
        match self.gender.as_str() {
            "M" => "Male",
            "F" => "Female",
            "X" => "Mixed",
            _ => "",
        }
    }

    fn age_text(&self) -> String {
        match (self.age_min.filter(|a| *a > 0), self.age_max.filter(|a| *a > 0)) {
            (Some(min), Some(max)) if min == max => format!("{} years", min),
            (Some(min), Some(max)) => format!("{} - {} years", min, max),
            (Some(min), None) => format!("{}+ years", min),
            (None, Some(max)) => format!("up to {} years", max),
            (None, None) => String::new(),
        }
    }

    fn grade_text(&self) -> String {
        match (self.grade_min.filter(|g| *g > 0), self.grade_max.filter(|g| *g > 0)) {
            (Some(min), Some(max)) if min == max => format!("grade {}", min),
            (Some(min), Some(max)) => format!("grade {} - {}", min, max),
            (Some(min), None) => format!("grade {}+", min),
            (None, Some(max)) => format!("up to grade {}", max),
            (None, None) => String::new(),
        }
    }

    /// The display name of the category.
    ///
    /// Uses the explicit name if there is one, otherwise composes it from
    /// the team flag, gender, age and grade ranges. Missing parts leave
    /// their separating spaces behind, so callers trim the result.
    pub fn build_name(&self) -> String {
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            return name.clone();
        }

        let team_text = if self.is_team { "Team" } else { "Single" };
        format!("{} {} {} {}", team_text, self.gender_label(), self.age_text(), self.grade_text())
    }
}

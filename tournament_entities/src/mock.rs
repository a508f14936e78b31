use sea_orm::{prelude::*, ActiveValue, PaginatorTrait};
use itertools::Itertools;

use faker_rand::en_us::{names::FullName, company::CompanyName};

use crate::domain::category::{Category, NewCategory};
use crate::domain::championship::Championship;
use crate::domain::invite::Invite;
use crate::domain::tournament::{NewTournament, Tournament, TournamentError};
use crate::schema;


#[derive(Debug)]
pub struct MockOption {
    pub num_single_categories: u32,
    pub num_team_categories: u32,
    pub competitors_per_championship: u32,
    pub num_invites: u32,
    pub use_random_names: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            num_single_categories: 2,
            num_team_categories: 2,
            competitors_per_championship: 2,
            num_invites: 2,
            use_random_names: false,
        }
    }
}

/// Everything `make_mock_tournament` put into the database.
#[derive(Debug)]
pub struct MockTournament {
    pub owner: schema::users::Model,
    pub venue: schema::venue::Model,
    pub tournament: Tournament,
    pub categories: Vec<Category>,
    pub championships: Vec<Championship>,
    pub invites: Vec<Invite>,
}

pub async fn make_mock_tournament<C>(db: &C) -> Result<MockTournament, TournamentError> where C: ConnectionTrait {
    make_mock_tournament_with_options(db, Default::default()).await
}

pub async fn make_mock_tournament_with_options<C>(db: &C, options: MockOption) -> Result<MockTournament, TournamentError> where C: ConnectionTrait {
    let owner_name = if options.use_random_names {
        rand::random::<FullName>().to_string()
    }
    else {
        "Tournament Owner".to_string()
    };
    let existing_users = schema::users::Entity::find().count(db).await?;
    let owner = schema::users::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(owner_name),
        email: ActiveValue::Set(format!("owner{}@example.com", existing_users + 1)),
    }.insert(db).await?;

    let venue_name = if options.use_random_names {
        rand::random::<CompanyName>().to_string()
    }
    else {
        "Main Dojo".to_string()
    };
    let venue = schema::venue::ActiveModel {
        id: ActiveValue::NotSet,
        venue_name: ActiveValue::Set(venue_name),
        address: ActiveValue::Set(Some("1 Budo Street".into())),
        city: ActiveValue::Set(Some("Tokyo".into())),
        latitude: ActiveValue::Set(Some(35.6762)),
        longitude: ActiveValue::Set(Some(139.6503)),
    }.insert(db).await?;

    let mut categories = vec![];
    for i in 0..options.num_single_categories {
        categories.push(Category::create(db, NewCategory {
            gender: if i % 2 == 0 { "M".into() } else { "F".into() },
            is_team: false,
            age_min: Some(18),
            grade_min: Some(1 + i as i32),
            ..Default::default()
        }).await?);
    }
    for i in 0..options.num_team_categories {
        categories.push(Category::create(db, NewCategory {
            alias: if i == 0 { Some("Team Open".into()) } else { None },
            gender: "X".into(),
            is_team: true,
            age_max: Some(18 + 5 * i as i32),
            ..Default::default()
        }).await?);
    }

    let date_ini = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).ok_or(DbErr::Custom("Invalid mock date".into()))?;
    let date_fin = chrono::NaiveDate::from_ymd_opt(2024, 6, 2).ok_or(DbErr::Custom("Invalid mock date".into()))?;
    let tournament = Tournament::create(db, NewTournament {
        venue_id: Some(venue.id),
        promoter: Some("National Kendo Federation".into()),
        register_date_limit: chrono::NaiveDate::from_ymd_opt(2024, 5, 15),
        ..NewTournament::new(owner.id, "Mock Kendo Open", date_ini, date_fin)
    }).await?;

    tournament.attach_categories(db, &categories.iter().map(|c| c.id).collect_vec()).await?;
    let championships = tournament.load_championships(db).await?;

    for championship in championships.iter() {
        let is_team = categories.iter().any(|c| c.id == championship.category_id && c.is_team);
        if is_team {
            schema::team::ActiveModel {
                id: ActiveValue::NotSet,
                championship_id: ActiveValue::Set(championship.id),
                name: ActiveValue::Set(format!("Team {}", championship.id)),
            }.insert(db).await?;
        }

        for i in 0..options.competitors_per_championship {
            schema::competitor::ActiveModel {
                id: ActiveValue::NotSet,
                championship_id: ActiveValue::Set(championship.id),
                user_id: ActiveValue::Set(owner.id),
                short_id: ActiveValue::Set(Some(i as i32 + 1)),
                confirmed: ActiveValue::Set(i % 2 == 0),
            }.insert(db).await?;
        }

        schema::tree::ActiveModel {
            id: ActiveValue::NotSet,
            championship_id: ActiveValue::Set(championship.id),
            area: ActiveValue::Set(1),
            round: ActiveValue::Set(1),
            position: ActiveValue::Set(1),
        }.insert(db).await?;
    }

    let mut invites = vec![];
    for i in 0..options.num_invites {
        invites.push(Invite::create(db, tournament.invite_target(), format!("guest{}@example.com", i), None).await?);
    }

    Ok(MockTournament {
        owner,
        venue,
        tournament,
        categories,
        championships,
        invites,
    })
}

use std::error::Error;

use assert_matches::assert_matches;
use sea_orm::{prelude::*, ActiveValue, PaginatorTrait, TransactionTrait};
use migration::{Migrator, MigratorTrait};
use tracing_test::traced_test;

use tournament_entities::config::Config;
use tournament_entities::db::connect;

use tournament_entities::domain::championship_settings::{ChampionshipSettings, ChampionshipSettingsAttributes};
use tournament_entities::domain::invite::{Invite, InviteTarget};
use tournament_entities::domain::tournament::{NewTournament, Tournament, TournamentError, LevelKind};
use tournament_entities::schema;

mod common;
use common::{create_tournament, date, insert_user, set_up_db, set_up_mock_db};


#[tokio::test]
async fn test_create_stores_attributes_unmodified() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;

    let tournament = Tournament::create(&db, NewTournament {
        register_date_limit: Some(date(2024, 2, 29)),
        level_id: 7,
        tournament_type: 0,
        rule_id: 2,
        host_organization: Some("Federación".into()),
        ..NewTournament::new(user.id, "Spring Taikai", date(2024, 3, 9), date(2024, 3, 10))
    }).await?;

    let loaded = Tournament::find_by_id(&db, tournament.id).await?.unwrap();
    assert_eq!(loaded, tournament);
    assert_eq!(loaded.slug, "spring-taikai");
    assert_eq!(loaded.date_ini, date(2024, 3, 9));
    assert_eq!(loaded.date_fin, date(2024, 3, 10));
    assert_eq!(loaded.register_date_limit, Some(date(2024, 2, 29)));
    assert_eq!(loaded.sport, "Kendo");
    assert_eq!(loaded.host_organization.as_deref(), Some("Federación"));
    assert!(loaded.is_national());
    assert!(loaded.needs_invitation());
    assert_eq!(loaded.level_kind(), Some(LevelKind::National));
    assert!(!loaded.is_deleted());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_unknown_type() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;

    let result = Tournament::create(&db, NewTournament {
        tournament_type: 7,
        ..NewTournament::new(user.id, "Spring Taikai", date(2024, 3, 9), date(2024, 3, 10))
    }).await;

    assert_matches!(result, Err(TournamentError::InvalidTournamentType(7)));
    assert_eq!(schema::tournament::Entity::find().count(&db).await?, 0);
    assert_eq!(schema::tournament_audit::Entity::find().count(&db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_unknown_type() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;
    let mut tournament = create_tournament(&db, user.id, "Kendo Cup").await?;

    tournament.tournament_type = 7;
    tournament.name = "Renamed".into();
    assert_matches!(tournament.save(&db).await, Err(TournamentError::InvalidTournamentType(7)));

    let stored = Tournament::find_by_id(&db, tournament.id).await?.unwrap();
    assert_eq!(stored.tournament_type, 1);
    assert_eq!(stored.name, "Kendo Cup");
    assert!(stored.is_open());

    Ok(())
}

#[tokio::test]
async fn test_schema_rejects_unknown_type() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;
    let now = chrono::Utc::now().naive_utc();

    let result = schema::tournament::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user.id),
        slug: ActiveValue::Set("raw".into()),
        name: ActiveValue::Set("Raw".into()),
        date_ini: ActiveValue::Set(date(2024, 3, 9)),
        date_fin: ActiveValue::Set(date(2024, 3, 10)),
        register_date_limit: ActiveValue::Set(None),
        sport: ActiveValue::Set("Kendo".into()),
        promoter: ActiveValue::Set(None),
        host_organization: ActiveValue::Set(None),
        technical_assistance: ActiveValue::Set(None),
        category: ActiveValue::Set(None),
        rule_id: ActiveValue::Set(0),
        tournament_type: ActiveValue::Set(2),
        venue_id: ActiveValue::Set(None),
        level_id: ActiveValue::Set(1),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }.insert(&db).await;

    assert!(result.is_err());
    assert_eq!(schema::tournament::Entity::find().count(&db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_same_name_gets_suffixed_slug() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;

    let first = create_tournament(&db, user.id, "Kendo Cup").await?;
    let second = create_tournament(&db, user.id, "Kendo Cup").await?;
    let third = create_tournament(&db, user.id, "kendo  cup!").await?;

    assert_eq!(first.slug, "kendo-cup");
    assert_eq!(second.slug, "kendo-cup-1");
    assert_eq!(third.slug, "kendo-cup-2");

    Ok(())
}

#[tokio::test]
async fn test_trashed_tournament_keeps_its_slug_reserved() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;

    let mut first = create_tournament(&db, user.id, "Kendo Cup").await?;
    first.delete(&db).await?;
    let second = create_tournament(&db, user.id, "Kendo Cup").await?;

    assert_eq!(second.slug, "kendo-cup-1");

    Ok(())
}

#[tokio::test]
async fn test_save_keeps_slug_until_regenerated() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;
    let mut tournament = create_tournament(&db, user.id, "Kendo Cup").await?;

    tournament.name = "Autumn Open".into();
    tournament.level_id = 2;
    tournament.save(&db).await?;

    let loaded = Tournament::find_by_id(&db, tournament.id).await?.unwrap();
    assert_eq!(loaded.name, "Autumn Open");
    assert_eq!(loaded.slug, "kendo-cup");
    assert!(loaded.is_local());

    tournament.regenerate_slug(&db).await?;
    assert_eq!(tournament.slug, "autumn-open");
    assert!(Tournament::find_by_slug(&db, "autumn-open").await?.is_some());
    assert!(Tournament::find_by_slug(&db, "kendo-cup").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_regenerating_an_unchanged_slug_keeps_it() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;
    let mut tournament = create_tournament(&db, user.id, "Kendo Cup").await?;

    tournament.regenerate_slug(&db).await?;
    assert_eq!(tournament.slug, "kendo-cup");

    Ok(())
}

#[tokio::test]
async fn test_find_by_slug_ignores_trashed() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament;

    assert_eq!(Tournament::find_by_slug(&db, &tournament.slug).await?.map(|t| t.id), Some(tournament.id));
    tournament.delete(&db).await?;
    assert!(Tournament::find_by_slug(&db, &tournament.slug).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_default_scope_hides_trashed_tournaments() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;
    let user = insert_user(&db, "a@example.com").await?;
    let kept = create_tournament(&db, user.id, "Kept").await?;
    let mut trashed = create_tournament(&db, user.id, "Trashed").await?;
    trashed.delete(&db).await?;

    assert_eq!(Tournament::get_all(&db).await?.into_iter().map(|t| t.id).collect::<Vec<_>>(), vec![kept.id]);
    assert_eq!(Tournament::get_only_trashed(&db).await?.into_iter().map(|t| t.id).collect::<Vec<_>>(), vec![trashed.id]);
    assert_eq!(Tournament::get_all_with_trashed(&db).await?.len(), 2);

    assert!(Tournament::find_by_id(&db, trashed.id).await?.is_none());
    assert!(Tournament::find_by_id_with_trashed(&db, trashed.id).await?.unwrap().is_deleted());

    assert_eq!(Tournament::find_by_id(&db, kept.id).await?.map(|t| t.name), Some("Kept".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_load_singular_relations() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let tournament = &mock.tournament;

    assert_eq!(tournament.load_owner(&db).await?.map(|u| u.id), Some(mock.owner.id));
    assert_eq!(tournament.load_level(&db).await?.map(|l| l.name), Some("No level".to_string()));
    assert_eq!(tournament.load_venue(&db).await?.map(|v| v.venue_name), Some("Main Dojo".to_string()));

    let user = insert_user(&db, "b@example.com").await?;
    let without_venue = create_tournament(&db, user.id, "Nowhere Cup").await?;
    assert!(without_venue.load_venue(&db).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_load_collections_through_championships() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let tournament = &mock.tournament;

    assert_eq!(tournament.load_championships(&db).await?.len(), 4);
    assert_eq!(tournament.load_teams(&db).await?.len(), 2);
    assert_eq!(tournament.load_competitors(&db).await?.len(), 8);
    assert_eq!(tournament.load_trees(&db).await?.len(), 4);
    assert_eq!(tournament.load_invites(&db).await?.len(), 2);

    let mut championship = tournament.load_championships(&db).await?.remove(0);
    ChampionshipSettings::create(&db, championship.id, ChampionshipSettingsAttributes::default()).await?;
    assert_eq!(tournament.load_championship_settings(&db).await?.len(), 1);

    championship.delete(&db).await?;
    assert_eq!(tournament.load_championships(&db).await?.len(), 3);
    assert_eq!(tournament.load_championships_with_trashed(&db).await?.len(), 4);
    assert_eq!(tournament.load_competitors(&db).await?.len(), 6);
    assert_eq!(tournament.load_trees(&db).await?.len(), 3);
    assert!(tournament.load_championship_settings(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_collections_of_other_tournaments_are_not_loaded() -> Result<(), Box<dyn Error>> {
    let (db, first) = set_up_mock_db().await?;
    let second = tournament_entities::mock::make_mock_tournament(&db).await?;

    assert_eq!(second.tournament.slug, "mock-kendo-open-1");
    assert_eq!(first.tournament.load_competitors(&db).await?.len(), 8);
    assert_eq!(second.tournament.load_invites(&db).await?.len(), 2);
    assert!(first.tournament.load_championships(&db).await?.iter().all(|c| c.tournament_id == first.tournament.id));

    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_delete_soft_deletes_championships_and_removes_invites() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament;

    tournament.delete(&db).await?;
    assert!(tournament.is_deleted());

    let championships = tournament.load_championships_with_trashed(&db).await?;
    assert_eq!(championships.len(), 4);
    assert!(championships.iter().all(|c| c.is_deleted()));
    assert!(tournament.load_championships(&db).await?.is_empty());

    assert!(Invite::get_all_for_target(&db, InviteTarget::tournament(tournament.id)).await?.is_empty());
    assert_eq!(schema::invite::Entity::find().count(&db).await?, 0);

    // Soft deleted championships keep their children.
    assert_eq!(schema::competitor::Entity::find().count(&db).await?, 8);
    assert!(tournament.load_competitors(&db).await?.is_empty());

    assert!(logs_contain("Deleted tournament"));

    Ok(())
}

#[tokio::test]
async fn test_delete_leaves_invites_of_other_targets() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let championship_invite = Invite::create(&db, InviteTarget::championship(mock.championships[0].id), "x@example.com".into(), None).await?;
    let mut tournament = mock.tournament;

    tournament.delete(&db).await?;

    let remaining = schema::invite::Entity::find().all(&db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, championship_invite.id);

    Ok(())
}

#[tokio::test]
async fn test_delete_twice_is_a_no_op() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament;

    tournament.delete(&db).await?;
    let deleted_at = tournament.deleted_at;
    let stored_deleted_at = Tournament::find_by_id_with_trashed(&db, tournament.id).await?.unwrap().deleted_at;
    tournament.delete(&db).await?;

    assert_eq!(tournament.deleted_at, deleted_at);
    assert_eq!(Tournament::find_by_id_with_trashed(&db, tournament.id).await?.unwrap().deleted_at, stored_deleted_at);
    assert!(stored_deleted_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_restore_revives_all_championships() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament;

    let mut trashed_before = tournament.load_championships(&db).await?.remove(1);
    trashed_before.delete(&db).await?;

    tournament.delete(&db).await?;
    tournament.restore(&db).await?;

    assert!(!tournament.is_deleted());
    assert!(!Tournament::find_by_id(&db, tournament.id).await?.unwrap().is_deleted());
    let championships = tournament.load_championships(&db).await?;
    assert_eq!(championships.len(), 4);
    assert!(championships.iter().any(|c| c.id == trashed_before.id));

    // Invites were removed for good.
    assert!(tournament.load_invites(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_restore_of_live_tournament_revives_trashed_championships() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament;

    let mut championship = tournament.load_championships(&db).await?.remove(0);
    championship.delete(&db).await?;
    assert_eq!(tournament.load_championships(&db).await?.len(), 3);

    tournament.restore(&db).await?;
    assert_eq!(tournament.load_championships(&db).await?.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_rolled_back_delete_changes_nothing() -> Result<(), Box<dyn Error>> {
    let (db, mock) = set_up_mock_db().await?;
    let mut tournament = mock.tournament.clone();

    let txn = db.begin().await?;
    tournament.delete(&txn).await?;
    txn.rollback().await?;

    let reloaded = Tournament::find_by_id(&db, tournament.id).await?.unwrap();
    assert!(!reloaded.is_deleted());
    assert_eq!(reloaded.load_championships(&db).await?.len(), 4);
    assert_eq!(reloaded.load_invites(&db).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_connect_enforces_cascades() -> Result<(), Box<dyn Error>> {
    let config = Config { db_url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect(&config).await?;
    Migrator::up(&db, None).await?;

    let pragma = db.query_one(sea_orm::Statement::from_string(
        sea_orm::DbBackend::Sqlite,
        "PRAGMA foreign_keys;",
    )).await?.unwrap();
    assert_eq!(pragma.try_get_by_index::<i32>(0)?, 1);

    let mock = tournament_entities::mock::make_mock_tournament(&db).await?;

    schema::tournament::Entity::delete_by_id(mock.tournament.id).exec(&db).await?;

    assert_eq!(schema::championship::Entity::find().count(&db).await?, 0);
    assert_eq!(schema::competitor::Entity::find().count(&db).await?, 0);
    // Invites have no foreign key to cascade along.
    assert_eq!(schema::invite::Entity::find().count(&db).await?, 2);

    Ok(())
}

use pretty_assertions::assert_eq;

use libris::traits::Id;
use libris::types::author::Author;
use libris::types::date::OptionalDate;
use libris::types::uuid::Uuid;

fn austen() -> Author {
    Author {
        id: Uuid::new(),
        first_name: Some("Jane".to_string()),
        family_name: Some("Austen".to_string()),
        date_of_birth: OptionalDate::from_ymd(1775, 12, 16),
        date_of_death: OptionalDate::from_ymd(1817, 7, 18),
        deleted: false,
    }
}

#[test]
fn name_is_family_comma_first() {
    assert_eq!(austen().name(), "Austen, Jane");
}

#[test]
fn name_empty_when_first_name_missing() {
    let author = Author {
        family_name: Some("Poe".to_string()),
        ..Default::default()
    };
    assert_eq!(author.name(), "");
}

#[test]
fn name_empty_when_family_name_missing() {
    let author = Author {
        first_name: Some("Edgar".to_string()),
        ..Default::default()
    };
    assert_eq!(author.name(), "");
}

#[test]
fn name_treats_blank_component_as_missing() {
    let author = Author {
        first_name: Some("".to_string()),
        family_name: Some("Poe".to_string()),
        ..Default::default()
    };
    assert_eq!(author.name(), "");
}

#[test]
fn url_is_canonical_catalog_path() {
    let id = Uuid::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let author = Author {
        id,
        ..Default::default()
    };
    assert_eq!(
        author.url(),
        "/catalog/author/67e55044-10b1-426f-9247-bb680e5fe0c8"
    );
}

#[test]
fn formatted_dates_are_medium_length() {
    let author = austen();
    assert_eq!(
        author.date_of_birth_formatted(),
        Some("Dec 16, 1775".to_string())
    );
    assert_eq!(
        author.date_of_death_formatted(),
        Some("Jul 18, 1817".to_string())
    );
}

#[test]
fn formatted_date_absent_when_not_recorded() {
    let author = Author::default();
    assert_eq!(author.date_of_birth_formatted(), None);
    assert_eq!(author.date_of_death_formatted(), None);
}

#[test]
fn lifespan_joins_birth_and_death() {
    assert_eq!(austen().lifespan(), "Dec 16, 1775 - Jul 18, 1817");
}

#[test]
fn lifespan_is_birth_date_alone_while_author_lives() {
    let author = Author {
        first_name: Some("Mark".to_string()),
        family_name: Some("Twain".to_string()),
        date_of_birth: OptionalDate::from_ymd(1835, 11, 30),
        ..Default::default()
    };
    assert_eq!(author.lifespan(), "Nov 30, 1835");
}

#[test]
fn lifespan_empty_without_birth_date() {
    let author = Author {
        date_of_death: OptionalDate::from_ymd(1817, 7, 18),
        ..Default::default()
    };
    assert_eq!(author.lifespan(), "");
}

// The birth date gates the whole lifespan, even when it was recorded
// but does not name a real calendar day.
#[test]
fn lifespan_empty_when_birth_date_is_impossible() {
    let author = Author {
        date_of_birth: OptionalDate::from_ymd(1990, 2, 30),
        date_of_death: OptionalDate::from_ymd(2020, 1, 1),
        ..Default::default()
    };
    assert_eq!(author.lifespan(), "");
}

#[test]
fn record_with_nothing_but_an_id_derives_empty_values() {
    let author = Author {
        id: Uuid::new(),
        first_name: Some("".to_string()),
        family_name: Some("Poe".to_string()),
        date_of_birth: OptionalDate(None),
        date_of_death: OptionalDate(None),
        deleted: false,
    };
    assert_eq!(author.name(), "");
    assert_eq!(author.lifespan(), "");
    assert_eq!(author.url(), format!("/catalog/author/{}", author.id.0));
}

#[test]
fn id_accessor_returns_the_id_field() {
    let author = austen();
    assert_eq!(author.id(), author.id);
}

#[test]
fn derivation_is_idempotent() {
    let author = austen();
    assert_eq!(author.name(), author.name());
    assert_eq!(author.url(), author.url());
    assert_eq!(author.lifespan(), author.lifespan());
    assert_eq!(
        author.date_of_birth_formatted(),
        author.date_of_birth_formatted()
    );
}

//! End-to-end scenarios over a small fixed collection.

use boardgame_planner::{
    BoardGame, Dir, GameField, GameList, Planner, PlannerError, Predicate,
};

// ============================================================================
// Fixtures
// ============================================================================

fn collection() -> Planner {
    Planner::new(vec![
        BoardGame::new("17 days", 6, 1, 8, 70, 70, 9.0, 600, 9.0, 2005),
        BoardGame::new("Chess", 7, 2, 2, 10, 20, 10.0, 700, 10.0, 2006),
        BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000),
        BoardGame::new("Go Fish", 2, 2, 10, 20, 120, 3.0, 200, 6.5, 2001),
        BoardGame::new("golang", 4, 2, 7, 50, 55, 7.0, 400, 9.5, 2003),
        BoardGame::new("GoRami", 3, 6, 6, 40, 42, 5.0, 300, 8.5, 2002),
        BoardGame::new("Monopoly", 8, 6, 10, 20, 1000, 1.0, 800, 5.0, 2007),
        BoardGame::new("Tucano", 5, 10, 20, 60, 90, 6.0, 500, 8.0, 2004),
    ])
}

fn names(games: &[&BoardGame]) -> Vec<String> {
    games.iter().map(|g| g.name().to_string()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filter_by_name() {
    let planner = collection();
    let found = planner.filter("name == Go").unwrap();
    assert_eq!(names(&found), vec!["Go"]);
}

#[test]
fn filter_by_name_contains() {
    let planner = collection();
    let found = planner.filter("name ~= GO").unwrap();
    assert_eq!(names(&found), vec!["Go", "Go Fish", "golang", "GoRami"]);
}

#[test]
fn filter_by_name_ordering() {
    let planner = collection();
    let found = planner.filter("name > go").unwrap();
    assert_eq!(
        names(&found),
        vec!["Go Fish", "golang", "GoRami", "Monopoly", "Tucano"]
    );
}

#[test]
fn filter_by_year_published() {
    let planner = collection();
    assert_eq!(planner.filter("yearPublished > 2003").unwrap().len(), 4);
}

#[test]
fn filter_by_difficulty() {
    let planner = collection();
    assert_eq!(planner.filter("difficulty >= 8.0").unwrap().len(), 3);
}

#[test]
fn filter_by_min_play_time() {
    let planner = collection();
    assert_eq!(planner.filter("minPlayTime >= 50").unwrap().len(), 3);
}

#[test]
fn filter_by_max_players() {
    let planner = collection();
    assert_eq!(planner.filter("maxPlayers > 6").unwrap().len(), 5);
}

#[test]
fn filter_by_multiple_conditions() {
    let planner = collection();
    let found = planner
        .filter("difficulty >= 7.0, yearPublished < 2005")
        .unwrap();
    assert_eq!(names(&found), vec!["Go", "golang"]);
}

#[test]
fn filter_with_underscored_fields() {
    let planner = collection();
    let found = planner.filter("min_players == 6, max_play_time < 100").unwrap();
    assert_eq!(names(&found), vec!["GoRami"]);
}

#[test]
fn invalid_field_is_parse_error() {
    let planner = collection();
    assert!(matches!(
        planner.filter("invalidFilter > 100"),
        Err(PlannerError::Parse { .. })
    ));
}

#[test]
fn unsupported_operator_is_parse_error() {
    let planner = collection();
    // `=>` reads as `>` with the field "rating =", which is unknown.
    assert!(matches!(
        planner.filter("rating => 5"),
        Err(PlannerError::Parse { .. })
    ));
    assert!(matches!(
        planner.filter("rating = 5"),
        Err(PlannerError::Parse { .. })
    ));
}

#[test]
fn every_numeric_field_rejects_contains() {
    let planner = collection();
    for field in GameField::all().iter().filter(|f| **f != GameField::Name) {
        let filter = format!("{} ~= 1", field);
        assert!(
            matches!(
                planner.filter(&filter),
                Err(PlannerError::UnsupportedOperation { .. })
            ),
            "{filter}"
        );
    }
}

#[test]
fn every_field_accepts_ordering_ops() {
    let planner = collection();
    for field in GameField::all() {
        for token in ["==", "!=", ">", ">=", "<", "<="] {
            let filter = format!("{} {} 5", field, token);
            assert!(planner.filter(&filter).is_ok(), "{filter}");
        }
    }
}

#[test]
fn parse_error_messages_are_readable() {
    let err = boardgame_planner::parse("bogus >= 1").unwrap_err();
    assert_eq!(err.to_string(), "invalid filter clause 'bogus >= 1': unknown field 'bogus'");

    let err = boardgame_planner::parse("rank == x").unwrap_err();
    assert!(err.to_string().starts_with("cannot parse 'x' as a value for rank"));
}

#[test]
fn empty_filter_parses_to_always() {
    assert_eq!(boardgame_planner::parse("").unwrap(), vec![Predicate::Always]);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sort_by_rating_ascending() {
    let planner = collection();
    let sorted = planner
        .filter_and_sort_by("", Some(GameField::Rating), Dir::Asc)
        .unwrap();
    assert_eq!(sorted.first().unwrap().name(), "Monopoly");
    assert_eq!(sorted.last().unwrap().name(), "Chess");
}

#[test]
fn sort_by_rating_descending() {
    let planner = collection();
    let sorted = planner
        .filter_and_sort_by("", Some(GameField::Rating), Dir::from_ascending(false))
        .unwrap();
    assert_eq!(sorted.first().unwrap().name(), "Chess");
    assert_eq!(sorted.last().unwrap().name(), "Monopoly");
}

#[test]
fn filter_and_sort_by_difficulty() {
    let planner = collection();
    let sorted = planner
        .filter_and_sort_by("yearPublished >= 2000", Some(GameField::Difficulty), Dir::Desc)
        .unwrap();
    assert_eq!(sorted.first().unwrap().name(), "Chess");
    assert_eq!(sorted.last().unwrap().name(), "Monopoly");
}

#[test]
fn sort_by_name_ignores_case() {
    let planner = collection();
    let sorted = planner
        .filter_and_sort("name ~= go", Some(GameField::Name))
        .unwrap();
    assert_eq!(names(&sorted), vec!["Go", "Go Fish", "golang", "GoRami"]);
}

#[test]
fn sort_by_parsed_field_name() {
    let planner = collection();
    let field: GameField = "year".parse().unwrap();
    let sorted = planner.filter_and_sort("", Some(field)).unwrap();
    assert_eq!(sorted.first().unwrap().name(), "Go");
}

#[test]
fn missing_sort_field_is_invalid_argument() {
    let planner = collection();
    assert!(matches!(
        planner.filter_and_sort_by("", None, Dir::Asc),
        Err(PlannerError::InvalidArgument(_))
    ));
}

// ============================================================================
// Working list
// ============================================================================

#[test]
fn plan_workflow() {
    let planner = collection();
    let view = planner
        .filter_and_sort("name ~= go", Some(GameField::Name))
        .unwrap();

    let mut plan = GameList::new();
    assert_eq!(plan.add_to_list("2-10", &view).unwrap(), 3);
    assert_eq!(plan.add_to_list("go", &view).unwrap(), 1);
    assert_eq!(plan.names(), vec!["Go", "Go Fish", "golang", "GoRami"]);

    // Insertion order is Go Fish, golang, GoRami, Go.
    assert_eq!(plan.remove_from_list("1-2").unwrap(), 2);
    assert_eq!(plan.names(), vec!["Go", "GoRami"]);

    plan.remove_from_list("all").unwrap();
    assert_eq!(plan.count(), 0);
}

#[test]
fn plan_selector_errors() {
    let planner = collection();
    let view = planner.filter("name ~= go, rank <= 300").unwrap();
    assert_eq!(view.len(), 3);

    let mut plan = GameList::new();
    assert!(matches!(
        plan.add_to_list("0", &view),
        Err(PlannerError::Index { index: 0, len: 3 })
    ));
    assert!(matches!(
        plan.add_to_list("5-1", &view),
        Err(PlannerError::InvalidArgument(_))
    ));
    assert!(matches!(
        plan.add_to_list("4-5", &view),
        Err(PlannerError::Index { .. })
    ));
    assert!(matches!(
        plan.remove_from_list("1"),
        Err(PlannerError::Index { index: 1, len: 0 })
    ));
    assert!(plan.is_empty());
}

#[test]
fn plan_adds_only_from_the_given_view() {
    let planner = collection();
    let view = planner.filter("rating >= 9").unwrap();

    let mut plan = GameList::new();
    assert!(plan.add_to_list("Monopoly", &view).is_err());
    plan.add_to_list("all", &view).unwrap();
    assert_eq!(plan.names(), vec!["17 days", "Chess", "golang"]);
}

#[cfg(test)]
mod tests {
    use covid_dashboard::config::Config;
    use covid_dashboard::models::{
        cases::{CaseHistory, CaseSummary, DailyRecord, Growth},
        dashboard::{DashboardAction, DashboardState},
        error::AppError,
        selection::Selection,
    };
    use covid_dashboard::services::url_codec::{initial_selection, selection_from_query, to_query};
    use std::rc::Rc;

    // Helper: a county list with descending counts, eight days long
    fn create_test_history(counties: usize) -> CaseHistory {
        let records = (1..=8u64)
            .map(|day| {
                let counts = (0..counties)
                    .map(|i| (format!("County {i}"), (counties - i) as u64 * day))
                    .collect();
                DailyRecord::new(format!("2020-04-0{day}"), counts)
            })
            .collect();
        CaseHistory::new(records)
    }

    fn loaded_state(counties: usize) -> DashboardState {
        let summary = create_test_history(counties).summarize().unwrap();
        DashboardState::new(Selection::default())
            .apply(DashboardAction::DataLoaded(Rc::new(summary)))
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::DataError("Need at least 8 daily records, got 2".to_string());
        assert_eq!(
            error.to_string(),
            "Data error: Need at least 8 daily records, got 2"
        );

        let error = AppError::QueryError("bad".to_string());
        assert_eq!(error.to_string(), "Query error: bad");
    }

    // ===== Derivation Tests =====

    #[test]
    fn test_weekly_growth_from_json() {
        let json = r#"[
            {"date":"d1","A":10,"B":5},
            {"date":"d2","A":20,"B":10},
            {"date":"d3","A":30,"B":15},
            {"date":"d4","A":40,"B":20},
            {"date":"d5","A":50,"B":25},
            {"date":"d6","A":60,"B":30},
            {"date":"d7","A":70,"B":35},
            {"date":"d8","A":100,"B":50}
        ]"#;
        let records: Vec<DailyRecord> = serde_json::from_str(json).unwrap();
        let summary = CaseHistory::new(records).summarize().unwrap();

        assert_eq!(summary.growth("A"), Some(Growth::Percent(900)));
        assert_eq!(summary.growth("A").unwrap().label(), "+900%");
        assert_eq!(summary.counties().to_vec(), vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_is_never_listed() {
        let json = r#"[
            {"date":"d1","Unknown":1,"A":1},{"date":"d2","Unknown":1,"A":1},
            {"date":"d3","Unknown":1,"A":1},{"date":"d4","Unknown":1,"A":1},
            {"date":"d5","Unknown":1,"A":1},{"date":"d6","Unknown":1,"A":1},
            {"date":"d7","Unknown":1,"A":1},{"date":"d8","Unknown":9,"A":2}
        ]"#;
        let records: Vec<DailyRecord> = serde_json::from_str(json).unwrap();
        let summary = CaseHistory::new(records).summarize().unwrap();

        assert_eq!(summary.counties().to_vec(), vec!["A"]);
        assert!(summary.list_for("unk").is_empty());
    }

    #[test]
    fn test_default_summary_is_empty() {
        let summary = CaseSummary::default();
        assert!(summary.counties().is_empty());
        assert!(summary.window().is_empty());
    }

    // ===== Selection Tests =====

    #[test]
    fn test_selection_never_exceeds_limit() {
        let mut state = loaded_state(30);
        let counties: Vec<String> = state.data.as_ref().unwrap().counties().to_vec();

        // Toggle everything twice in an interleaved order
        for round in 0..2 {
            for (i, county) in counties.iter().enumerate() {
                if (i + round) % 3 != 0 {
                    state = state.apply(DashboardAction::Toggle(county.clone()));
                    assert!(state.selection.len() <= Config::SELECTION_LIMIT);
                }
            }
        }
    }

    #[test]
    fn test_toggle_selected_decreases_by_one() {
        let state = loaded_state(5)
            .apply(DashboardAction::Toggle("County 1".into()))
            .apply(DashboardAction::Toggle("County 2".into()));
        let before = state.selection.len();

        let state = state.apply(DashboardAction::Toggle("County 1".into()));
        assert_eq!(state.selection.len(), before - 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_eleventh_county_is_rejected() {
        let mut state = loaded_state(12);
        for i in 0..10 {
            state = state.apply(DashboardAction::Toggle(format!("County {i}")));
        }
        let before = state.selection.clone();

        let state = state.apply(DashboardAction::Toggle("County 10".into()));
        assert_eq!(state.selection, before);
        assert_eq!(
            state.error.as_deref(),
            Some("10 is currently the selection limit")
        );
    }

    // ===== Search Tests =====

    #[test]
    fn test_empty_search_returns_full_ranked_list() {
        let state = loaded_state(4);
        assert_eq!(
            state.visible_counties(),
            vec!["County 0", "County 1", "County 2", "County 3"]
        );
    }

    #[test]
    fn test_superstring_search_is_a_subset() {
        let state = loaded_state(25);

        let broad = state.apply(DashboardAction::Search("county 1".into()));
        let narrow = state.apply(DashboardAction::Search("COUNTY 12".into()));

        let broad = broad.visible_counties();
        let narrow = narrow.visible_counties();
        assert_eq!(narrow, vec!["County 12"]);
        assert!(narrow.iter().all(|c| broad.contains(c)));
        assert!(broad.len() > narrow.len());
    }

    #[test]
    fn test_search_is_idempotent() {
        let once = loaded_state(15).apply(DashboardAction::Search("4".into()));
        let twice = once.apply(DashboardAction::Search("4".into()));
        assert_eq!(once.visible_counties(), twice.visible_counties());
    }

    // ===== URL Codec Tests =====

    #[test]
    fn test_selection_round_trips_through_url() {
        let mut selection = Selection::default();
        for county in ["Cook, Illinois", "King, Washington", "Orleans, Louisiana"] {
            selection.toggle(county);
        }

        let query = to_query(selection.as_slice());
        let restored = initial_selection(&query).unwrap();
        assert_eq!(restored, selection);
    }

    #[test]
    fn test_url_overrides_defaults_without_merge() {
        let query = to_query(&["Harris, Texas"]);
        let selection = initial_selection(&query).unwrap();

        assert_eq!(selection.as_slice(), ["Harris, Texas"]);
        assert!(!selection.contains(Config::DEFAULT_COUNTIES[0]));
    }

    #[test]
    fn test_url_names_are_not_validated() {
        let names = selection_from_query(&to_query(&["Atlantis, Nowhere"])).unwrap();
        assert_eq!(names, vec!["Atlantis, Nowhere"]);
    }
}

use super::*;

const FIXTURE: &str = r#"{
    "targetStoryPoints": 5,
    "tasks": ["TaskA", "TaskB", "TaskC"],
    "storyPoints": [1, 2, 3],
    "priorities": [4, 5, 6]
}"#;

#[test]
fn test_parse_camel_case() {
    let file = BacklogFile::from_json(FIXTURE).unwrap();
    assert_eq!(file.target_story_points, 5);
    assert_eq!(file.tasks, vec!["TaskA", "TaskB", "TaskC"]);
    assert_eq!(file.story_points, vec![1, 2, 3]);
    assert_eq!(file.priorities, vec![4, 5, 6]);
}

#[test]
fn test_parse_pascal_case_aliases() {
    let json = r#"{"TargetStoryPoints": 3, "Tasks": ["X"], "StoryPoints": [2], "Priorities": [7]}"#;
    let file = BacklogFile::from_json(json).unwrap();
    assert_eq!(file.target_story_points, 3);
    assert_eq!(file.tasks, vec!["X"]);
    assert_eq!(file.story_points, vec![2]);
    assert_eq!(file.priorities, vec![7]);
}

#[test]
fn test_parse_missing_fields_default() {
    let file = BacklogFile::from_json("{}").unwrap();
    assert_eq!(file, BacklogFile::default());

    let backlog = Backlog::try_from(file).unwrap();
    assert_eq!(backlog.capacity, 0);
    assert!(backlog.is_empty());
}

#[test]
fn test_parse_invalid_json() {
    let err = BacklogFile::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BacklogError::Json(_)));
    assert!(err.to_string().starts_with("invalid backlog JSON"));
}

#[test]
fn test_parse_wrong_type() {
    let err = BacklogFile::from_json(r#"{"storyPoints": ["one"]}"#).unwrap_err();
    assert!(matches!(err, BacklogError::Json(_)));
}

#[test]
fn test_validate_builds_tasks_in_order() {
    let backlog = Backlog::try_from(BacklogFile::from_json(FIXTURE).unwrap()).unwrap();
    assert_eq!(backlog.capacity, 5);
    assert_eq!(backlog.len(), 3);
    assert_eq!(backlog.names(), vec!["TaskA", "TaskB", "TaskC"]);
    assert_eq!(backlog.story_points(), vec![1, 2, 3]);
    assert_eq!(backlog.priorities(), vec![4, 5, 6]);
    assert_eq!(backlog.tasks[1], Task::new("TaskB", 2, 5));
}

#[test]
fn test_validate_length_mismatch_reports_all_lengths() {
    let file = BacklogFile {
        target_story_points: 4,
        tasks: vec!["a".into(); 5],
        story_points: vec![1; 6],
        priorities: vec![1; 4],
    };
    match Backlog::try_from(file) {
        Err(BacklogError::LengthMismatch {
            tasks,
            story_points,
            priorities,
        }) => {
            assert_eq!((tasks, story_points, priorities), (5, 6, 4));
        }
        other => panic!("expected length mismatch, got {:?}", other),
    }
}

#[test]
fn test_validate_single_mismatched_pair() {
    // Only priorities differ; tasks and story points agree.
    let file = BacklogFile {
        target_story_points: 4,
        tasks: vec!["a".into(), "b".into()],
        story_points: vec![1, 1],
        priorities: vec![1],
    };
    assert!(matches!(
        Backlog::try_from(file),
        Err(BacklogError::LengthMismatch { .. })
    ));
}

#[test]
fn test_validate_negative_capacity() {
    let file = BacklogFile {
        target_story_points: -1,
        ..BacklogFile::default()
    };
    assert!(matches!(
        Backlog::try_from(file),
        Err(BacklogError::NegativeCapacity(-1))
    ));
}

#[test]
fn test_validate_negative_story_points() {
    let file = BacklogFile {
        target_story_points: 3,
        tasks: vec!["ok".into(), "bad".into()],
        story_points: vec![1, -2],
        priorities: vec![1, 1],
    };
    match Backlog::try_from(file) {
        Err(BacklogError::NegativeStoryPoints { task, value }) => {
            assert_eq!(task, "bad");
            assert_eq!(value, -2);
        }
        other => panic!("expected negative story points, got {:?}", other),
    }
}

#[test]
fn test_validate_priority_overflow() {
    let file = BacklogFile::from_json(
        r#"{"targetStoryPoints": 2, "tasks": ["A", "B"], "storyPoints": [1, 1], "priorities": [9223372036854775807, 1]}"#,
    )
    .unwrap();
    match Backlog::try_from(file) {
        Err(BacklogError::PriorityOverflow { task }) => assert_eq!(task, "B"),
        other => panic!("expected priority overflow, got {:?}", other),
    }
}

#[test]
fn test_validate_large_priorities_that_fit() {
    // Negative priorities do not count toward the bound.
    let file = BacklogFile {
        target_story_points: 2,
        tasks: vec!["A".into(), "Neg".into(), "B".into()],
        story_points: vec![1, 1, 1],
        priorities: vec![i64::MAX - 1, i64::MIN, 1],
    };
    let backlog = Backlog::try_from(file).unwrap();
    assert_eq!(backlog.priorities(), vec![i64::MAX - 1, i64::MIN, 1]);
}

#[test]
fn test_validate_allows_negative_priority() {
    let file = BacklogFile {
        target_story_points: 3,
        tasks: vec!["meh".into()],
        story_points: vec![1],
        priorities: vec![-5],
    };
    let backlog = Backlog::try_from(file).unwrap();
    assert_eq!(backlog.tasks[0].priority, -5);
}

#[test]
fn test_from_parts_mismatch() {
    let err = Backlog::from_parts(3, vec!["a".into()], vec![1, 2], vec![1]).unwrap_err();
    assert!(matches!(
        err,
        BacklogError::LengthMismatch {
            tasks: 1,
            story_points: 2,
            priorities: 1
        }
    ));
}

#[test]
fn test_with_capacity_overrides_target() {
    let backlog = Backlog::new(5, vec![Task::new("a", 1, 1)]).with_capacity(9);
    assert_eq!(backlog.capacity, 9);
    assert_eq!(backlog.len(), 1);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("backlog.json");
    std::fs::write(&path, FIXTURE).unwrap();

    let file = BacklogFile::load(&path).unwrap();
    assert_eq!(file.tasks.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = BacklogFile::load(&path).unwrap_err();
    assert!(matches!(err, BacklogError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_sprint_totals() {
    let sprint = Sprint {
        total_story_points: 4,
        tasks: vec![Task::new("a", 1, 2), Task::new("b", 3, 10)],
    };
    assert_eq!(sprint.total_priority(), 12);
    assert_eq!(sprint.names(), vec!["a", "b"]);
    assert_eq!(sprint.story_points(), vec![1, 3]);
    assert_eq!(sprint.priorities(), vec![2, 10]);
    assert!(!sprint.is_empty());
    assert!(Sprint::default().is_empty());
}

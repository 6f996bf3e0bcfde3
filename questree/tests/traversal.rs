//! Integration tests for the question flow engine, driven end to end
//! through the scripted [`TestProvider`].

use questree::{
    AnswerValue, Condition, DynamicValue, Inputs, QTreeNode, Question, QuestionKind,
    SelectOptions, SelectQuestion, TestProvider, TextQuestion, Validation, traverse,
};

fn select(name: &str, title: &str, options: Vec<&str>) -> Question {
    Question::single_select(name, title, options)
}

#[tokio::test]
async fn walks_every_question_in_declaration_order() {
    let mut root = QTreeNode::new(Question::text("scaffold", "Scaffold"));
    root.add_child(QTreeNode::new(Question::text("name", "Project name")))
        .add_child(QTreeNode::new(Question::text("lang", "Language")));

    let provider = TestProvider::new()
        .answer("yes")
        .answer("my-project")
        .answer("rust");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let names: Vec<_> = provider.transcript().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["scaffold", "name", "lang"]);
    assert_eq!(inputs.get_text("name"), Some("my-project"));
    assert_eq!(inputs.get_text("lang"), Some("rust"));
    assert_eq!(inputs.len(), 3);
}

#[tokio::test]
async fn conditions_prune_inactive_branches() {
    let mut root = QTreeNode::new(select("kind", "Capability", vec!["bot", "tab"]));
    root.add_child(
        QTreeNode::new(Question::text("bot-id", "Bot id"))
            .with_condition(Condition::equals("bot")),
    )
    .add_child(
        QTreeNode::new(Question::text("tab-url", "Tab url"))
            .with_condition(Condition::equals("tab")),
    );

    let provider = TestProvider::new().answer("bot").answer("1234");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let names: Vec<_> = provider.transcript().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["kind", "bot-id"]);
    assert_eq!(inputs.get_text("bot-id"), Some("1234"));
    assert!(!inputs.contains("tab-url"));
}

#[tokio::test]
async fn back_restores_exactly_one_step() {
    let mut q2 = QTreeNode::new(Question::text("q2", "Second"));
    q2.add_child(QTreeNode::new(Question::text("q3", "Third")));
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(q2);

    let provider = TestProvider::new()
        .answer("a")
        .answer("b")
        .back()
        .answer("b2")
        .answer("c");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let names: Vec<_> = provider.transcript().iter().map(|i| i.name.clone()).collect();
    // q3 triggers back, q2 is re-asked, then q3 again
    assert_eq!(names, vec!["q1", "q2", "q3", "q2", "q3"]);
    assert_eq!(inputs.get_text("q1"), Some("a"));
    assert_eq!(inputs.get_text("q2"), Some("b2"));
    assert_eq!(inputs.get_text("q3"), Some("c"));
}

#[tokio::test]
async fn back_skips_over_auto_skipped_questions() {
    let mut only = SelectQuestion::new(vec!["only"]);
    only.skip_single = true;
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    let mut auto = QTreeNode::new(Question::new(
        "q2",
        "Auto",
        QuestionKind::SingleSelect(only),
    ));
    auto.add_child(QTreeNode::new(Question::text("q3", "Third")));
    root.add_child(auto);

    let provider = TestProvider::new()
        .answer("a")
        .back()
        .answer("a2")
        .answer("c");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let transcript = provider.transcript();
    let names: Vec<_> = transcript.iter().map(|i| i.name.clone()).collect();
    // back at q3 lands on q1; q2 is never shown and answers itself again
    assert_eq!(names, vec!["q1", "q3", "q1", "q3"]);
    assert_eq!(inputs.get_text("q1"), Some("a2"));
    assert_eq!(inputs.get_text("q2"), Some("only"));
    assert_eq!(inputs.get_text("q3"), Some("c"));

    // the auto-skipped question never enters the step count
    let steps: Vec<_> = transcript.iter().map(|i| i.step).collect();
    assert_eq!(steps, vec![1, 2, 1, 2]);
}

#[tokio::test]
async fn provider_skips_are_excluded_from_steps_and_back_targets() {
    let mut q2 = QTreeNode::new(Question::text("q2", "Second"));
    q2.add_child(QTreeNode::new(Question::text("q3", "Third")));
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(q2);

    // the provider skip-answers q2; back at q3 must land on q1
    let provider = TestProvider::new()
        .answer("a")
        .skip("s")
        .back()
        .answer("a2")
        .skip("s2")
        .answer("c");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let transcript = provider.transcript();
    let names: Vec<_> = transcript.iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["q1", "q2", "q3", "q1", "q2", "q3"]);
    let steps: Vec<_> = transcript.iter().map(|i| i.step).collect();
    assert_eq!(steps, vec![1, 2, 2, 1, 2, 2]);
    assert_eq!(inputs.get_text("q1"), Some("a2"));
    assert_eq!(inputs.get_text("q2"), Some("s2"));
    assert_eq!(inputs.get_text("q3"), Some("c"));
}

#[tokio::test]
async fn back_over_a_skip_valued_first_question_cancels() {
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(QTreeNode::new(Question::text("q2", "Second")));

    // no manual answer exists behind q2, so back must cancel the flow
    let provider = TestProvider::new().skip("s").back();
    let mut inputs = Inputs::new();
    let err = traverse(&root, &mut inputs, &provider).await.unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn back_past_the_first_question_cancels() {
    let root = QTreeNode::new(Question::text("q1", "First"));

    let provider = TestProvider::new().back();
    let mut inputs = Inputs::new();
    let err = traverse(&root, &mut inputs, &provider).await.unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(err.name(), "UserCancel");
}

#[tokio::test]
async fn cancel_aborts_and_keeps_answers_so_far() {
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(QTreeNode::new(Question::text("q2", "Second")));

    let provider = TestProvider::new().answer("a").cancel();
    let mut inputs = Inputs::new();
    let err = traverse(&root, &mut inputs, &provider).await.unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(inputs.get_text("q1"), Some("a"));
    assert!(!inputs.contains("q2"));
}

#[tokio::test]
async fn preset_answers_bypass_the_ui() {
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(QTreeNode::new(Question::text("q2", "Second")));

    let provider = TestProvider::new().answer("b");
    let mut inputs = Inputs::new();
    inputs.insert("q1", "preset");
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let transcript = provider.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].name, "q2");
    // presets still advance the step counter
    assert_eq!(transcript[0].step, 2);
    assert_eq!(inputs.get_text("q1"), Some("preset"));
    assert_eq!(inputs.get_text("q2"), Some("b"));
}

#[tokio::test]
async fn empty_dynamic_options_abort_the_flow() {
    let mut empty = SelectQuestion::new(vec!["placeholder"]);
    empty.dynamic_options = Some(DynamicValue::compute(|_| {
        Ok(SelectOptions::Items(Vec::new()))
    }));
    let root = QTreeNode::new(Question::new(
        "choice",
        "Choice",
        QuestionKind::SingleSelect(empty),
    ));

    let provider = TestProvider::new();
    let mut inputs = Inputs::new();
    let err = traverse(&root, &mut inputs, &provider).await.unwrap_err();

    assert_eq!(err.name(), "EmptySelectOption");
    assert!(err.to_string().contains("choice"));
}

#[tokio::test]
async fn function_questions_compute_from_prior_answers() {
    let mut root = QTreeNode::new(Question::text("app-name", "App name"));
    let mut derived = QTreeNode::new(Question::computed("folder", |inputs| {
        let name = inputs.require_text("app-name")?;
        Ok(AnswerValue::from(format!("/projects/{name}")))
    }));
    derived.add_child(QTreeNode::new(Question::confirm("proceed", "Proceed?")));
    root.add_child(derived);

    let provider = TestProvider::new().answer("demo").answer(true);
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    assert_eq!(inputs.get_text("folder"), Some("/projects/demo"));
    assert_eq!(inputs.require_bool("proceed").unwrap(), true);

    let transcript = provider.transcript();
    let names: Vec<_> = transcript.iter().map(|i| i.name.clone()).collect();
    // the function question never reaches the provider or the step count
    assert_eq!(names, vec!["app-name", "proceed"]);
    assert_eq!(transcript[1].step, 2);
}

#[tokio::test]
async fn step_numbers_track_known_remaining_questions() {
    let mut root = QTreeNode::new(Question::text("q1", "First"));
    root.add_child(QTreeNode::new(Question::text("q2", "Second")))
        .add_child(QTreeNode::new(Question::text("q3", "Third")));

    let provider = TestProvider::new().answer("a").answer("b").answer("c");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let counts: Vec<_> = provider
        .transcript()
        .iter()
        .map(|i| (i.step, i.total_steps))
        .collect();
    // q1's children are unknown until it is answered; afterwards both
    // siblings are on the pending stack
    assert_eq!(counts, vec![(1, 1), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn groups_relay_the_activating_answer_to_grandchildren() {
    let mut group = QTreeNode::named_group("bot-setup").with_condition(Condition::equals("bot"));
    group
        .add_child(QTreeNode::new(Question::text("bot-id", "Bot id")))
        .add_child(
            QTreeNode::new(Question::text("bot-pwd", "Bot password"))
                .with_condition(Condition::equals("bot")),
        );
    let mut root = QTreeNode::new(select("kind", "Capability", vec!["bot", "tab"]));
    root.add_child(group)
        .add_child(QTreeNode::new(Question::text("done", "Done")));

    let provider = TestProvider::new()
        .answer("bot")
        .answer("id")
        .answer("pwd")
        .answer("ok");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let names: Vec<_> = provider.transcript().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["kind", "bot-id", "bot-pwd", "done"]);
}

#[tokio::test]
async fn unsatisfied_group_condition_prunes_the_whole_subtree() {
    let mut group = QTreeNode::named_group("bot-setup").with_condition(Condition::equals("bot"));
    group.add_child(QTreeNode::new(Question::text("bot-id", "Bot id")));
    let mut root = QTreeNode::new(select("kind", "Capability", vec!["bot", "tab"]));
    root.add_child(group)
        .add_child(QTreeNode::new(Question::text("done", "Done")));

    let provider = TestProvider::new().answer("tab").answer("ok");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let names: Vec<_> = provider.transcript().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["kind", "done"]);
    assert!(!inputs.contains("bot-id"));
}

#[tokio::test]
async fn rejected_answers_are_asked_again() {
    let mut text = TextQuestion::default();
    text.validation = Some(Validation::new(|value, _| match value.as_text() {
        Some(s) if !s.is_empty() => None,
        _ => Some("must not be empty".to_string()),
    }));
    let root =
        QTreeNode::new(Question::text("project", "Project name").with_kind(QuestionKind::Text(text)));

    let provider = TestProvider::new().answer("").answer("demo");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    assert_eq!(provider.transcript().len(), 2);
    assert_eq!(provider.rejections(), vec!["must not be empty"]);
    assert_eq!(inputs.get_text("project"), Some("demo"));
}

#[tokio::test]
async fn nested_selects_resolve_level_by_level() {
    // each level's title echoes the id chosen at the level above
    let l3 = QTreeNode::new(Question::single_select(
        "l3",
        DynamicValue::compute(|inputs: &Inputs| Ok(inputs.require_text("l2")?.to_string())),
        vec!["1-2-1", "1-2-2"],
    ))
    .with_condition(Condition::equals("1-2"));
    let mut l2 = QTreeNode::new(Question::single_select(
        "l2",
        DynamicValue::compute(|inputs: &Inputs| Ok(inputs.require_text("l1")?.to_string())),
        vec!["1-1", "1-2"],
    ))
    .with_condition(Condition::equals("1"));
    l2.add_child(l3);
    let mut root = QTreeNode::new(select("l1", "Level 1", vec!["1", "2"]));
    root.add_child(l2);

    let provider = TestProvider::new().answer("1").answer("1-2").answer("1-2-1");
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    let transcript = provider.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].option_ids, vec!["1-1", "1-2"]);
    assert_eq!(transcript[2].option_ids, vec!["1-2-1", "1-2-2"]);
    assert_eq!(transcript[1].title, "1");
    assert_eq!(transcript[2].title, "1-2");
    assert_eq!(inputs.get_text("l1"), Some("1"));
    assert_eq!(inputs.get_text("l2"), Some("1-2"));
    assert_eq!(inputs.get_text("l3"), Some("1-2-1"));
}

#[tokio::test]
async fn multi_select_answers_store_the_full_list() {
    let root = QTreeNode::new(Question::multi_select(
        "features",
        "Features",
        vec!["sso", "storage", "api"],
    ));

    let provider = TestProvider::new().answer(vec!["sso", "api"]);
    let mut inputs = Inputs::new();
    traverse(&root, &mut inputs, &provider).await.unwrap();

    assert_eq!(
        inputs.require_list("features").unwrap(),
        vec!["sso".to_string(), "api".to_string()]
    );
}

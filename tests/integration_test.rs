use quiz_deck::models::load_deck;
use quiz_deck::{
    classify_subject, logger, normalize_stem, parse_questions, App, Config, OutputFormat,
    QuizDeck, Subject, BLANK_MARKER,
};

#[test]
fn test_end_to_end_single_question() {
    logger::init_test();

    let text = [
        "1. The capital of France is ____.",
        "A. Paris",
        "B. London",
        "【答案】A",
        "解析：Paris is the capital.",
    ]
    .join("\n");

    let questions = parse_questions(&text);
    assert_eq!(questions.len(), 1);

    let q = &questions[0];
    assert_eq!(q.number, "1");
    assert_eq!(q.stem, format!("1. The capital of France is {}.", BLANK_MARKER));
    assert_eq!(q.stem.matches(BLANK_MARKER).count(), 1);
    assert_eq!(q.options, vec!["A. Paris", "B. London"]);
    assert_eq!(q.explicit_answer, Some('A'));
    assert_eq!(q.inline_answer, None);
    assert_eq!(q.explanation, "Paris is the capital.");
}

#[test]
fn test_question_count_equals_question_start_lines() {
    let text = "\
试卷标题
1. 第一题（   ）
A. 甲 B. 乙 C. 丙 D. 丁
无标签的说明行
2. 第二题______
【答案】B
3. 第三题( C )
解析：第一行
补充说明
12. 最后一题";

    let questions = parse_questions(text);
    let numbers: Vec<&str> = questions.iter().map(|q| q.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "12"]);
    assert_eq!(questions[0].options.len(), 4);
    assert_eq!(questions[1].explicit_answer, Some('B'));
    assert_eq!(questions[2].inline_answer, Some('C'));
    assert_eq!(questions[2].explanation, "第一行\n补充说明");
}

#[test]
fn test_inline_and_explicit_answers_are_both_retained() {
    let questions = parse_questions("1. 选出正确的一项（A）\n【答案】C");
    let q = &questions[0];
    assert_eq!(q.inline_answer, Some('A'));
    assert_eq!(q.explicit_answer, Some('C'));
    assert_eq!(q.answer(), Some('C'));
    assert!(q.has_conflicting_answers());
}

#[test]
fn test_no_question_start_lines() {
    let questions = parse_questions("A. Paris B. London\n【答案】A\n解析：无题号");
    assert!(questions.is_empty());
    assert_eq!(classify_subject(&questions), Subject::General);

    let deck = QuizDeck::from_text("空文档", "A. Paris");
    assert!(deck.ensure_not_empty().is_err());
}

#[test]
fn test_stem_normalizer_properties() {
    let inline = normalize_stem("5. 下列正确的是（ B ）");
    assert_eq!(inline.inline_answer, Some('B'));
    assert_eq!(inline.text.matches(BLANK_MARKER).count(), 1);
    assert!(!inline.text.contains("B"));

    let blank = normalize_stem("6. 横线处填写______");
    assert_eq!(blank.text.matches(BLANK_MARKER).count(), 1);
    assert!(!blank.text.contains('_'));

    assert_eq!(normalize_stem(&blank.text).text, blank.text);
}

#[test]
fn test_english_density_wins_over_weak_keywords() {
    let text = "\
1. Tom is good at maths. He can solve the problem ____.
A. easy B. easily C. easier D. easiest
Answer: B
Explanation: An adverb is needed to modify the verb solve.";

    let questions = parse_questions(text);
    assert_eq!(questions[0].explicit_answer, Some('B'));
    assert_eq!(classify_subject(&questions), Subject::English);
}

#[test]
fn test_chinese_document_classified() {
    let text = "\
1. 下列词语中加点字注音完全正确的一项是（ A ）
A. 拼音甲 B. 拼音乙 C. 拼音丙 D. 拼音丁
【解析】【分析】本题考查字音。注意多音字的拼音。";

    let questions = parse_questions(text);
    assert_eq!(questions[0].explanation, "本题考查字音。注意多音字的拼音。");
    assert_eq!(classify_subject(&questions), Subject::Chinese);
}

#[tokio::test]
async fn test_app_processes_folder() {
    logger::init_test();

    let root = std::env::temp_dir().join(format!("quiz_deck_app_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    let input = root.join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(
        input.join("化学.txt"),
        "1. 下列属于化合物的是（   ）\nA. 氧气 B. 水\n【答案】B\n解析：水由氢、氧两种元素组成。",
    )
    .unwrap();
    std::fs::write(input.join("空白.txt"), "没有题目").unwrap();

    let config = Config {
        input_folder: input.to_string_lossy().to_string(),
        output_folder: root.join("out").to_string_lossy().to_string(),
        output_format: OutputFormat::Toml,
        warn_file: root.join("warn.txt").to_string_lossy().to_string(),
        output_log_file: root.join("output.txt").to_string_lossy().to_string(),
        max_concurrent_documents: 2,
        ..Config::default()
    };

    let stats = App::initialize(config).unwrap().run().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.exported, 1);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.questions, 1);

    let deck = load_deck(&root.join("out").join("化学.toml")).await.unwrap();
    assert_eq!(deck.subject, Subject::Chemistry);
    assert_eq!(deck.questions[0].explicit_answer, Some('B'));

    let warn = std::fs::read_to_string(root.join("warn.txt")).unwrap();
    assert!(warn.contains("空白"));
    let _ = std::fs::remove_dir_all(&root);
}

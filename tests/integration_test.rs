use question_paper_gen::config::Config;
use question_paper_gen::models::{load_question_pool, DistributionSpec, PaperRequest};
use question_paper_gen::services::points_for;
use question_paper_gen::utils::logging;
use question_paper_gen::{assemble, App, QuestionRecord, Tier};
use std::path::{Path, PathBuf};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "question_paper_gen_it_{}_{}",
        std::process::id(),
        name
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn math_pool_json() -> String {
    let records: Vec<QuestionRecord> = Tier::ALL
        .iter()
        .flat_map(|tier| {
            (0..10).map(move |i| {
                QuestionRecord::new("Math", *tier, format!("Math {} question {}", tier, i))
            })
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}

fn test_config(dir: &Path) -> Config {
    Config {
        questions_file: dir.join("questions.json").to_string_lossy().to_string(),
        output_dir: dir.join("out").to_string_lossy().to_string(),
        output_log_file: dir.join("paper_log.txt").to_string_lossy().to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_generate_math_paper_end_to_end() {
    logging::init(false);

    let dir = scratch_dir("math");
    let config = test_config(&dir);
    std::fs::write(&config.questions_file, math_pool_json()).unwrap();

    let pool = load_question_pool(Path::new(&config.questions_file))
        .await
        .expect("加载题库失败");
    assert_eq!(pool.len(), 30);

    let request = PaperRequest {
        total_questions: 10,
        distribution: DistributionSpec::from_percentages(20, 50, 30),
        subject: "Math".to_string(),
    };

    let app = App::initialize(config.clone()).expect("初始化失败");
    let output = app.generate(&pool, &request).await.expect("组卷失败");

    let document = std::fs::read_to_string(&output).unwrap();
    assert!(output.ends_with("Math_question_paper.txt"));
    assert!(document.contains("Total Marks: 59"));
    assert_eq!(document.matches("Ques.").count(), 10);
    assert_eq!(document.matches("-(02 marks)").count(), 2);
    assert_eq!(document.matches("-(05 marks)").count(), 5);
    assert_eq!(document.matches("-(10 marks)").count(), 3);

    let log = std::fs::read_to_string(&config.output_log_file).unwrap();
    assert!(log.contains("总分: 59"));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_unknown_subject_is_fatal_and_writes_nothing() {
    logging::init(false);

    let dir = scratch_dir("chemistry");
    let config = test_config(&dir);
    std::fs::write(&config.questions_file, math_pool_json()).unwrap();
    let pool = load_question_pool(Path::new(&config.questions_file))
        .await
        .unwrap();

    let request = PaperRequest {
        total_questions: 10,
        distribution: DistributionSpec::from_percentages(20, 50, 30),
        subject: "Chemistry".to_string(),
    };

    let app = App::initialize(config.clone()).unwrap();
    let err = app.generate(&pool, &request).await.unwrap_err();

    let app_err = err
        .downcast_ref::<question_paper_gen::AppError>()
        .expect("应为 AppError");
    assert!(app_err.is_empty_result());
    assert!(!dir.join("out").join("Chemistry_question_paper.txt").exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_toml_pool_with_shortfall() {
    let dir = scratch_dir("toml");
    let path = dir.join("bank.toml");
    std::fs::write(
        &path,
        r#"
[[questions]]
subject = "Physics"
difficulty = "Easy"
question = "State Newton's first law."

[[questions]]
subject = "Physics"
difficulty = "Easy"
question = "Define velocity."

[[questions]]
subject = "Physics"
difficulty = "Hard"
question = "Derive the period of a simple pendulum."

[[questions]]
subject = "Physics"
difficulty = "Trivial"
question = "What colour is the sky?"
"#,
    )
    .unwrap();

    let pool = load_question_pool(&path).await.unwrap();
    assert_eq!(pool.len(), 4);

    let distribution = DistributionSpec::from_percentages(50, 0, 50);
    let assembly = assemble(&pool, 4, &distribution, "Physics");

    assert_eq!(assembly.subject_pool_size, 4);
    assert_eq!(assembly.shortfalls.len(), 1);
    assert_eq!(assembly.shortfalls[0].tier, Tier::Hard);
    assert_eq!(assembly.shortfalls[0].required, 2);
    assert_eq!(assembly.shortfalls[0].available, 1);

    let selection = assembly.into_selection().unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.total_score(), 4);
    let recomputed: u32 = selection
        .records()
        .iter()
        .map(|r| points_for(&r.difficulty))
        .sum();
    assert_eq!(recomputed, selection.total_score());

    std::fs::remove_dir_all(&dir).ok();
}

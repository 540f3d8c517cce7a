use alg_cards::error::{AppError, FetchError, SelectionError};
use alg_cards::{AlgorithmSet, App, AppResult, Config, GenerationJob, ImageSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 内存图标来源，记录请求次数；URL 中包含 `fail_on` 时返回 503
#[derive(Default, Clone)]
struct MemorySource {
    calls: Arc<AtomicUsize>,
    fail_on: Option<String>,
}

impl ImageSource for MemorySource {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = &self.fail_on {
            if url.contains(marker.as_str()) {
                return Err(AppError::bad_status(url, 503));
            }
        }
        Ok(b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_vec())
    }
}

fn config() -> Config {
    Config {
        max_workers: Some(4),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_pll_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("pll");
    let source = MemorySource::default();
    let calls = Arc::clone(&source.calls);

    let mut job = GenerationJob::new(&target, AlgorithmSet::Pll);
    job.learning_cards = true;

    let summary = App::with_source(config(), source).run(&job).await.unwrap();
    assert_eq!(summary.selected, 21);
    assert_eq!(summary.downloaded, 21);
    assert_eq!(summary.rows, 21);
    assert_eq!(summary.pages, Some(3));
    assert_eq!(calls.load(Ordering::SeqCst), 21);

    let icons = std::fs::read_dir(&target)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .count();
    assert_eq!(icons, 21);

    let csv = std::fs::read_to_string(target.join("ankiCardSet.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3 + 21);
    assert_eq!(lines[2], "#deck:Cubing::3x3x3::PLL with Arrows");
    assert!(lines[3].starts_with("<img src=\"Aa.svg\">\tAa\t"));

    let tex = std::fs::read_to_string(target.join("Lernkarten.tex")).unwrap();
    assert_eq!(tex.matches("% Icons page").count(), 3);
    assert_eq!(tex.matches("% Algorithms page (reversed)").count(), 3);
    assert_eq!(tex.matches("\\newpage").count(), 5);
    assert!(tex.contains("\\cubeimg{Aa.svg}"));
    assert!(tex.trim_end().ends_with("\\end{document}"));
}

#[tokio::test]
async fn test_oll_learning_cards_seven_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = GenerationJob::new(dir.path(), AlgorithmSet::Oll);
    job.skip_images = true;
    job.learning_cards = true;

    let summary = App::with_source(config(), MemorySource::default())
        .run(&job)
        .await
        .unwrap();
    assert_eq!(summary.rows, 57);
    assert_eq!(summary.pages, Some(7));

    let tex = std::fs::read_to_string(dir.path().join("Lernkarten.tex")).unwrap();
    assert_eq!(tex.matches("% Icons page").count(), 7);
    assert_eq!(tex.matches("\\newpage").count(), 13);
}

#[tokio::test]
async fn test_glob_limits_downloads_only() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::default();
    let calls = Arc::clone(&source.calls);

    let mut job = GenerationJob::new(dir.path(), AlgorithmSet::Pll);
    job.pattern = "G?".to_string();

    let summary = App::with_source(config(), source).run(&job).await.unwrap();
    assert_eq!(summary.selected, 4);
    assert_eq!(summary.downloaded, 4);
    assert_eq!(summary.rows, 21);
    assert_eq!(summary.pages, None);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert!(dir.path().join("Gc.svg").exists());
    assert!(!dir.path().join("Aa.svg").exists());
    assert!(!dir.path().join("Lernkarten.tex").exists());
}

#[tokio::test]
async fn test_zero_match_fails_before_any_io() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("never-created");
    let source = MemorySource::default();
    let calls = Arc::clone(&source.calls);

    let mut job = GenerationJob::new(&target, AlgorithmSet::Pll);
    job.pattern = "Nonexistent".to_string();

    let result = App::with_source(config(), source).run(&job).await;
    assert!(matches!(
        result,
        Err(AppError::Selection(SelectionError::NoMatch { .. }))
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!target.exists());
}

#[tokio::test]
async fn test_skip_images_makes_no_requests() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource::default();
    let calls = Arc::clone(&source.calls);

    let mut job = GenerationJob::new(dir.path(), AlgorithmSet::BigCube);
    job.skip_images = true;

    let summary = App::with_source(config(), source).run(&job).await.unwrap();
    assert_eq!(summary.downloaded, 0);
    assert_eq!(summary.rows, 9);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(dir.path().join("ankiCardSet.csv").exists());
}

#[tokio::test]
async fn test_fetch_failure_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let source = MemorySource {
        fail_on: Some("case=".to_string()),
        ..MemorySource::default()
    };

    let job = GenerationJob::new(dir.path(), AlgorithmSet::TwoLookOll);
    let result = App::with_source(config(), source).run(&job).await;

    assert!(matches!(
        result,
        Err(AppError::Fetch(FetchError::BadStatus { status: 503, .. }))
    ));
    assert!(!dir.path().join("ankiCardSet.csv").exists());
}

#[tokio::test]
async fn test_custom_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("mine.toml");
    std::fs::write(
        &catalog_path,
        r#"
deck = "Cubing::Mine"

[[algorithm]]
name = "Sune"
alg = "R U R' U R U2 R'"
kind = "oll"

[[algorithm]]
name = "Anti Sune"
alg = "R U2 R' U' R U' R'"
kind = "oll"
"#,
    )
    .unwrap();

    let target = dir.path().join("out");
    let mut job = GenerationJob::new(&target, AlgorithmSet::All);
    job.catalog_file = Some(catalog_path);

    let summary = App::with_source(config(), MemorySource::default())
        .run(&job)
        .await
        .unwrap();
    assert_eq!(summary.rows, 2);

    let csv = std::fs::read_to_string(target.join("ankiCardSet.csv")).unwrap();
    assert!(csv.contains("#deck:Cubing::Mine\n"));
    assert!(csv.contains("<img src=\"Anti Sune.svg\">\tAnti Sune\tR U2 R' U' R U' R'\t3x3x3 OLL\n"));
}

#[tokio::test]
async fn test_duplicate_names_rejected_before_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("dupes.toml");
    std::fs::write(
        &catalog_path,
        "[[algorithm]]\nname = \"X\"\nalg = \"R U\"\n\n[[algorithm]]\nname = \"X\"\nalg = \"U R\"\n",
    )
    .unwrap();

    let source = MemorySource::default();
    let calls = Arc::clone(&source.calls);
    let target = dir.path().join("out");
    let mut job = GenerationJob::new(&target, AlgorithmSet::All);
    job.catalog_file = Some(catalog_path);

    let result = App::with_source(config(), source).run(&job).await;
    assert!(matches!(
        result,
        Err(AppError::Selection(SelectionError::DuplicateName { .. }))
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!target.exists());
}

#[tokio::test]
#[ignore] // 默认忽略，需要网络：cargo test -- --ignored
async fn test_real_visualiser_single_icon() {
    alg_cards::utils::logging::init(true);

    let dir = tempfile::tempdir().unwrap();
    let mut job = GenerationJob::new(dir.path(), AlgorithmSet::Pll);
    job.pattern = "T".to_string();

    let summary = App::new(Config::default())
        .expect("创建客户端失败")
        .run(&job)
        .await
        .expect("生成失败");

    assert_eq!(summary.downloaded, 1);
    let icon = std::fs::read_to_string(dir.path().join("T.svg")).unwrap();
    assert!(icon.contains("<svg"));
}

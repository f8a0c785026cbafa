//! End-to-end runs of the load command against the in-process backends.

use clap::Parser;
use kvgen::{connectivity_guidance, open_store, run_load};
use kvgen_core::Catalog;
use kvgen_populate::{Backend, LoadArgs};
use kvgen_store::TableStore;
use std::io::Write;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    load: LoadArgs,
}

fn parse(args: &[&str]) -> LoadArgs {
    let mut argv = vec!["kvgen"];
    argv.extend_from_slice(args);
    TestCli::try_parse_from(argv).unwrap().load
}

#[tokio::test]
async fn test_memory_backend_run() {
    let args = parse(&["--backend", "memory", "--nops", "25", "--seed", "42"]);
    let report = run_load(&args).await.unwrap();
    assert_eq!(report.children.rows, 25);
    assert_eq!(report.parents.rows, 246);
    assert_eq!(report.deleted(), 0);
}

#[tokio::test]
async fn test_memory_backend_zero_records_with_delete() {
    let args = parse(&["--backend", "memory", "--nops", "0", "--delete", "--drop-tables"]);
    let report = run_load(&args).await.unwrap();
    assert_eq!(report.children.outcomes(), 0);
    assert_eq!(report.parents.rows, 246);
}

#[tokio::test]
async fn test_embedded_surreal_run() {
    let args = parse(&[
        "--backend",
        "surreal-mem",
        "--nops",
        "15",
        "--seed",
        "7",
        "--display",
    ]);
    let report = run_load(&args).await.unwrap();
    assert_eq!(report.children.rows, 15);
}

#[tokio::test]
async fn test_open_store_reports_backend() {
    let args = parse(&["--backend", "memory"]);
    let store = open_store(args.backend, &args.store_config().unwrap())
        .await
        .unwrap();
    assert_eq!(store.backend(), "memory");

    let catalog = Catalog::standard().unwrap();
    kvgen_populate::ensure_schema(store.as_ref(), &catalog)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_store_is_a_connectivity_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "username = \"root\"\npassword = \"secret\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    // Port 1 on localhost refuses connections.
    let mut args = parse(&["--host", "127.0.0.1", "--port", "1", "--security", &path]);
    args.backend = Backend::Surreal;

    let config = args.store_config().unwrap();
    let err = match kvgen_store::SurrealStore::connect_with_retries(&config, 1, 0).await {
        Ok(_) => panic!("connected to a closed port"),
        Err(e) => kvgen_populate::LoadError::from(e),
    };
    assert!(err.is_connectivity());
    assert!(connectivity_guidance(&args).contains("127.0.0.1:1"));
}

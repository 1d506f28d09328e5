//! End-to-end workflow through the real adapters.

use std::{fs, path::Path, sync::Arc};

use planwise_adapters::{
    CatalogLoader, ConfigurationFileReader, InMemoryCatalog, LocalFilesystem, MemoryFilesystem,
};
use planwise_core::{
    application::ANALYSIS_FILE_NAME,
    domain::CatalogGroup,
    prelude::*,
};
use tempfile::TempDir;

const WIZARD: &str = r#"{
  "project": {"name": "Corner Bakery", "websiteTypes": ["ecommerce"]},
  "stack": {"framework": "nextjs", "database": "postgresql"},
  "commerce": {"paymentProviders": ["stripe"]},
  "deployment": {"target": "vercel"}
}"#;

fn write_wizard(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("wizard.json");
    fs::write(&path, WIZARD).unwrap();
    path
}

#[test]
fn plans_and_exports_to_memory() {
    let temp = TempDir::new().unwrap();
    let wizard = write_wizard(&temp);

    let catalog = Arc::new(InMemoryCatalog::with_builtin().unwrap());
    let planning = PlanningService::new(catalog, Box::new(ConfigurationFileReader::new()));
    let bundle = planning.plan_file(&wizard, &DocumentKind::ALL).unwrap();

    let fs_handle = MemoryFilesystem::new();
    let export = ExportService::new(Box::new(fs_handle.clone()));
    let written = export
        .export(
            Path::new("/out"),
            &bundle.documents,
            Some(&bundle.report),
            ExportOptions::default(),
        )
        .unwrap();

    assert_eq!(written.len(), 3);
    let prompt = fs_handle
        .read_file(Path::new("/out/INIT_PROMPT.md"))
        .unwrap();
    assert!(prompt.contains("Corner Bakery"));
    assert!(prompt.contains("Stripe"));
    assert!(
        fs_handle
            .read_file(&Path::new("/out").join(ANALYSIS_FILE_NAME))
            .unwrap()
            .contains("complexityScore")
    );
}

#[test]
fn second_export_needs_force() {
    let temp = TempDir::new().unwrap();
    let wizard = write_wizard(&temp);
    let out = temp.path().join("docs");

    let planning = PlanningService::new(
        Arc::new(InMemoryCatalog::with_builtin().unwrap()),
        Box::new(ConfigurationFileReader::new()),
    );
    let bundle = planning
        .plan_file(&wizard, &[DocumentKind::DevelopmentConcept])
        .unwrap();
    let export = ExportService::new(Box::new(LocalFilesystem::new()));

    export
        .export(&out, &bundle.documents, None, ExportOptions::default())
        .unwrap();
    assert!(out.join("DEVELOPMENT_CONCEPT.md").is_file());

    let again = export.export(&out, &bundle.documents, None, ExportOptions::default());
    assert!(again.is_err());

    export
        .export(&out, &bundle.documents, None, ExportOptions { force: true })
        .unwrap();
}

#[test]
fn catalog_overlay_changes_document_labels() {
    let temp = TempDir::new().unwrap();
    let wizard = write_wizard(&temp);
    let catalog_dir = temp.path().join("catalog");
    fs::create_dir_all(&catalog_dir).unwrap();
    fs::write(
        catalog_dir.join("payments.toml"),
        "group = \"payment-provider\"\n\n[[options]]\nid = \"stripe\"\nlabel = \"Stripe Payments\"\n",
    )
    .unwrap();

    let catalog = InMemoryCatalog::with_builtin().unwrap();
    CatalogLoader::new(&catalog_dir).apply_to(&catalog).unwrap();
    assert_eq!(
        catalog.label(CatalogGroup::PaymentProvider, "stripe").as_deref(),
        Some("Stripe Payments")
    );

    let planning = PlanningService::new(Arc::new(catalog), Box::new(ConfigurationFileReader::new()));
    let bundle = planning
        .plan_file(&wizard, &[DocumentKind::InitPrompt])
        .unwrap();
    let doc = bundle.document(DocumentKind::InitPrompt).unwrap();
    assert!(doc.to_markdown().contains("Stripe Payments"));
}

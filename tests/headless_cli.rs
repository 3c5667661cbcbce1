use ifckit::{
    load_headless, ElementCategory, LoadStatus, ModelFile, SessionOptions, Severity, ViewerConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

const DUPLEX: &str = "ISO-10303-21;
HEADER;
FILE_SCHEMA(('IFC2X3'));
ENDSEC;
DATA;
#1= IFCPROJECT('3MD_HkJ6X2EwpfIbCFm0g_',$,'Duplex',$,$,$,$,$,$);
#10= IFCSLAB('a',$,'Floor',$,$,$,$,$,.FLOOR.);
#11= IFCSLAB('b',$,'Roof',$,$,$,$,$,.ROOF.);
#20= IFCDOOR('c',$,'Door',$,$,$,$,$,$,$);
ENDSEC;
END-ISO-10303-21;
";

fn ifc_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ifc")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_report_for_valid_model() {
    let file = ifc_file(DUPLEX);
    let options = SessionOptions::from(&ViewerConfig::default());

    let report = load_headless(options, ModelFile::new(file.path()))
        .await
        .unwrap();

    assert!(report.succeeded());
    assert_eq!(
        report.notification.as_ref().map(|n| n.severity),
        Some(Severity::Success)
    );
    let model = report.model.as_ref().unwrap();
    assert_eq!(model.entity_count, 4);
    assert_eq!(model.count(ElementCategory::Slab), 2);

    let lines = report.lines();
    assert_eq!(lines[0], "IFC File loaded successfully!");
    assert!(lines[1].ends_with("(IFC2X3): 4 entities"));
    assert_eq!(lines.len(), 2 + ElementCategory::COUNT);
    assert!(lines
        .iter()
        .any(|l| l.trim_start().starts_with("IFCSLAB") && l.ends_with(" 2")));
}

#[tokio::test]
async fn test_report_for_broken_model() {
    let file = ifc_file("HEADER;\nENDSEC;\n");

    let report = load_headless(SessionOptions::default(), ModelFile::new(file.path()))
        .await
        .unwrap();

    assert!(!report.succeeded());
    assert_eq!(report.status, LoadStatus::Failed);
    assert_eq!(report.model, None);
    assert_eq!(
        report.lines(),
        vec!["Error loading the IFC File. Check the console for more information."]
    );
}

extern crate admission;
extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

#[cfg(test)]
mod tests {
    use admission::receipt::pdf;
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn main_cmd(dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("main").unwrap();
        cmd.arg("--db")
            .arg(dir.path().join("students.db"))
            .arg("--receipts")
            .arg(dir.path().join("receipts"))
            .env_remove("ADMISSION_INSTITUTE")
            .env_remove("ADMISSION_CURRENCY")
            .env_remove("ADMISSION_FONT")
            .env_remove("RUST_LOG");

        cmd
    }

    fn submit_student(dir: &TempDir, name: &str, course: &str, fees_total: &str, fees_paid: &str) {
        main_cmd(dir)
            .arg("submit")
            .args(&["--name", name])
            .args(&["--email", "student@example.com"])
            .args(&["--phone", "98450 00000"])
            .args(&["--course", course])
            .args(&["--fees-total", fees_total])
            .args(&["--fees-paid", fees_paid])
            .assert()
            .success()
            .stdout(predicate::str::contains("Student added successfully!"));
    }

    fn pdf_text(document: &[u8]) -> String {
        pdf::extract_text(document).unwrap()
    }

    #[test]
    fn submit_prints_summary() {
        let dir = tempfile::tempdir().unwrap();

        main_cmd(&dir)
            .arg("submit")
            .args(&["--name", "Asha Rao"])
            .args(&["--email", "asha@example.com"])
            .args(&["--phone", "98450 00000"])
            .args(&["--course", "GIS Basics"])
            .args(&["--fees-total", "5000"])
            .args(&["--fees-paid", "2000"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""name":"Asha Rao""#))
            .stdout(predicate::str::contains(r#""course":"GIS Basics""#))
            .stdout(predicate::str::contains(r#""fees_paid":2000"#));
    }

    #[test]
    fn submit_reads_json_from_stdin() {
        let dir = tempfile::tempdir().unwrap();

        main_cmd(&dir)
            .args(&["submit", "--json"])
            .write_stdin(
                r#"{"name": "Asha Rao", "email": "a@example.com", "phone": "1",
                    "course": "GIS Basics", "fees_total": 5000, "fees_paid": "2000"}"#,
            )
            .assert()
            .success()
            .stdout(predicate::str::contains("Student added successfully!"));

        main_cmd(&dir)
            .args(&["students", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""fees_total": 5000"#));
    }

    #[test]
    fn submit_rejects_invalid_fees() {
        let dir = tempfile::tempdir().unwrap();

        main_cmd(&dir)
            .arg("submit")
            .args(&["--name", "Asha Rao"])
            .args(&["--email", "asha@example.com"])
            .args(&["--phone", "98450 00000"])
            .args(&["--course", "GIS Basics"])
            .args(&["--fees-total", "five thousand"])
            .args(&["--fees-paid", "2000"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("fees_total"));

        main_cmd(&dir)
            .arg("submit")
            .args(&["--name", "Asha Rao"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Missing form field"));

        main_cmd(&dir)
            .arg("students")
            .assert()
            .success()
            .stdout(predicate::str::contains("Asha Rao").not());
    }

    #[test]
    fn receipt_is_written_and_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");

        main_cmd(&dir)
            .args(&["receipt", "Asha Rao"])
            .assert()
            .success()
            .stdout(predicate::str::contains("receipt_Asha_Rao.pdf"));
        let receipt_path = dir.path().join("receipts").join("receipt_Asha_Rao.pdf");
        let first = std::fs::read(&receipt_path).unwrap();
        assert!(first.starts_with(b"%PDF"));
        let text = pdf_text(&first);
        assert!(text.contains("Name: Asha Rao"), "{}", text);
        assert!(text.contains("Course: GIS Basics"), "{}", text);
        assert!(text.contains("Amount Paid: ₹2000"), "{}", text);

        main_cmd(&dir)
            .args(&["receipt", "Asha Rao"])
            .assert()
            .success();
        let second = std::fs::read(&receipt_path).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            std::fs::read_dir(dir.path().join("receipts"))
                .unwrap()
                .count(),
            1
        );
    }

    #[test]
    fn receipt_streams_latest_record() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");
        submit_student(&dir, "Asha Rao", "Cartography", "8000", "6500");

        let output = main_cmd(&dir)
            .args(&["--institute", "Survey School", "receipt", "Asha Rao", "--stdout"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(output.stdout.starts_with(b"%PDF"));
        let text = pdf_text(&output.stdout);
        assert!(text.contains("Survey School Receipt"), "{}", text);
        assert!(text.contains("Course: Cartography"), "{}", text);
        assert!(text.contains("Amount Paid: ₹6500"), "{}", text);
        assert!(!text.contains("GIS Basics"), "{}", text);
    }

    #[test]
    fn receipt_for_unknown_name_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");

        main_cmd(&dir)
            .args(&["receipt", "asha rao"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Receipt not found"));
        assert!(!dir
            .path()
            .join("receipts")
            .join("receipt_asha_rao.pdf")
            .exists());
    }

    #[test]
    fn students_lists_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "First Student", "GIS Basics", "100", "10");
        submit_student(&dir, "Second Student", "Cartography", "200", "20");

        main_cmd(&dir)
            .arg("students")
            .assert()
            .success()
            .stdout(predicate::function(|output: &str| {
                match (output.find("Second Student"), output.find("First Student")) {
                    (Some(second), Some(first)) => second < first,
                    _ => false,
                }
            }));
    }

    #[test]
    fn optimize_database() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");

        main_cmd(&dir)
            .arg("optimize")
            .assert()
            .success()
            .stdout(predicate::str::contains("Optimization done!"));
    }

    #[test]
    fn status_reports_admissions_and_receipts() {
        let dir = tempfile::tempdir().unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");
        submit_student(&dir, "Ravi Kumar", "Cartography", "8000", "6500");
        main_cmd(&dir)
            .args(&["receipt", "Ravi Kumar"])
            .assert()
            .success();

        main_cmd(&dir)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Admissions: 2"))
            .stdout(predicate::str::contains(": 1\n"))
            .stdout(predicate::str::contains("receipt_Ravi_Kumar.pdf"));
    }

    #[test]
    fn environment_configures_desk() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("env.db");
        let receipt_dir = dir.path().join("env_receipts");

        let mut cmd = Command::cargo_bin("main").unwrap();
        cmd.env("ADMISSION_DB", &db_path)
            .env("ADMISSION_RECEIPTS", &receipt_dir)
            .env("ADMISSION_INSTITUTE", "Survey School")
            .env("ADMISSION_CURRENCY", "$")
            .env_remove("ADMISSION_FONT")
            .env_remove("RUST_LOG")
            .arg("submit")
            .args(&["--name", "Asha Rao"])
            .args(&["--email", "asha@example.com"])
            .args(&["--phone", "98450 00000"])
            .args(&["--course", "GIS Basics"])
            .args(&["--fees-total", "5000"])
            .args(&["--fees-paid", "2000"])
            .assert()
            .success();
        assert!(db_path.exists());

        let mut cmd = Command::cargo_bin("main").unwrap();
        cmd.env("ADMISSION_DB", &db_path)
            .env("ADMISSION_RECEIPTS", &receipt_dir)
            .env("ADMISSION_INSTITUTE", "Survey School")
            .env("ADMISSION_CURRENCY", "$")
            .env_remove("ADMISSION_FONT")
            .env_remove("RUST_LOG")
            .args(&["receipt", "Asha Rao"])
            .assert()
            .success();

        let document = std::fs::read(receipt_dir.join("receipt_Asha_Rao.pdf")).unwrap();
        let text = pdf_text(&document);
        assert!(text.contains("Survey School Receipt"), "{}", text);
        assert!(text.contains("Amount Paid: $2000"), "{}", text);
    }

    #[test]
    fn verbose_output_goes_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("desk.log");

        main_cmd(&dir)
            .arg("--log-file")
            .arg(&log_path)
            .arg("-v")
            .args(&["receipt", "Nobody"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Receipt not found"))
            .stderr(predicate::str::contains("unknown student").not());

        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("INFO"), "{}", log);
        assert!(log.contains("Opened enrollment database"), "{}", log);
        assert!(log.contains("WARN"), "{}", log);
        assert!(log.contains("Receipt requested for unknown student 'Nobody'"), "{}", log);
    }

    #[test]
    fn verbosity_controls_stderr_logging() {
        let dir = tempfile::tempdir().unwrap();

        main_cmd(&dir)
            .args(&["students"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Opened enrollment database").not());

        main_cmd(&dir)
            .args(&["-v", "students"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Opened enrollment database"));
    }

    #[test]
    fn custom_font_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = dir.path().join("ReceiptSans.ttf");
        std::fs::copy(
            concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf"),
            &font_path,
        )
        .unwrap();
        submit_student(&dir, "Asha Rao", "GIS Basics", "5000", "2000");

        let output = main_cmd(&dir)
            .arg("--font")
            .arg(&font_path)
            .args(&["receipt", "Asha Rao", "--stdout"])
            .output()
            .unwrap();
        assert!(output.status.success());
        let text = pdf_text(&output.stdout);
        assert!(text.contains("Amount Paid: ₹2000"), "{}", text);
        assert!(output
            .stdout
            .windows(b"/ReceiptSans".len())
            .any(|window| window == b"/ReceiptSans"));

        main_cmd(&dir)
            .arg("--font")
            .arg(dir.path().join("missing.ttf"))
            .arg("students")
            .assert()
            .code(1);
    }
}

//! End-to-end tests for the splitter on CP866 reports in a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

use district_splitter::config::ENCODING;
use district_splitter::{split_file, Region, SplitOptions};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

const REPORT: &str = "\
Сводка за 12.03
\\six Outage in Адмиралтейский district
\\ml Some note with unknown area
General announcement
\\st Василеостровский: прорыв трубы
\\euler Адмиралтейский, повторно
Конец сводки
";

/// Write `content` as CP866 into a fresh directory.
fn write_report(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    let (bytes, _, unmappable) = ENCODING.encode(content);
    assert!(!unmappable);
    fs::write(&path, &bytes).unwrap();
    (dir, path)
}

fn read_cp866(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let (text, _) = ENCODING.decode_without_bom_handling(&bytes);
    text.into_owned()
}

fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_marked_lines_writes_nothing() {
    let (dir, path) = write_report("plain.txt", "one\ntwo\n\\unknown marker\n");

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    assert!(report.files.is_empty());
    assert_eq!(report.total_lines, 3);
    assert_eq!(dir_listing(dir.path()), vec!["plain.txt"]);
}

#[test]
fn test_one_file_per_present_region() {
    let (dir, path) = write_report("report.txt", REPORT);

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    let regions: Vec<Region> = report.files.iter().map(|f| f.region).collect();
    assert_eq!(regions, vec![Region::Adm, Region::Vas, Region::Other]);
    assert_eq!(
        dir_listing(dir.path()),
        vec![
            "report-adm.txt",
            "report-other.txt",
            "report-vas.txt",
            "report.txt",
        ]
    );
}

#[test]
fn test_region_file_contents() {
    let (dir, path) = write_report("report.txt", REPORT);

    split_file(&path, &SplitOptions::default()).unwrap();

    assert_eq!(
        read_cp866(&dir.path().join("report-adm.txt")),
        "\
Сводка за 12.03
\\six Outage in Адмиралтейский district
General announcement
\\euler Адмиралтейский, повторно
Конец сводки
"
    );
    assert_eq!(
        read_cp866(&dir.path().join("report-vas.txt")),
        "\
Сводка за 12.03
General announcement
\\st Василеостровский: прорыв трубы
Конец сводки
"
    );
    assert_eq!(
        read_cp866(&dir.path().join("report-other.txt")),
        "\
Сводка за 12.03
\\ml Some note with unknown area
General announcement
Конец сводки
"
    );
}

#[test]
fn test_report_line_counts() {
    let (_dir, path) = write_report("report.txt", REPORT);

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    assert_eq!(report.total_lines, 7);
    let counts: Vec<usize> = report.files.iter().map(|f| f.lines).collect();
    assert_eq!(counts, vec![5, 4, 4]);
}

#[test]
fn test_every_input_line_reaches_some_output() {
    let (_dir, path) = write_report("report.txt", REPORT);

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    let written: Vec<String> = report
        .files
        .iter()
        .flat_map(|f| read_cp866(&f.path).lines().map(str::to_string).collect::<Vec<_>>())
        .collect();
    for line in REPORT.lines() {
        assert!(written.iter().any(|w| w == line), "missing: {line}");
    }
}

#[test]
fn test_tagged_lines_never_cross_regions() {
    let (_dir, path) = write_report("report.txt", REPORT);

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    for file in &report.files {
        for line in read_cp866(&file.path).lines() {
            let classified = district_splitter::classify(line);
            if let Some(region) = classified.region() {
                assert_eq!(region, file.region, "{line} in {}", file.path.display());
            }
        }
    }
}

#[test]
fn test_second_run_is_byte_identical() {
    let (dir, path) = write_report("report.txt", REPORT);

    split_file(&path, &SplitOptions::default()).unwrap();
    let first = fs::read(dir.path().join("report-adm.txt")).unwrap();
    split_file(&path, &SplitOptions::default()).unwrap();
    let second = fs::read(dir.path().join("report-adm.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_input_is_left_untouched() {
    let (_dir, path) = write_report("report.txt", REPORT);
    let before = fs::read(&path).unwrap();

    split_file(&path, &SplitOptions::default()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_stale_output_is_overwritten() {
    let (dir, path) = write_report("report.txt", REPORT);
    let stale = dir.path().join("report-vas.txt");
    fs::write(&stale, "old run\nwith more\nlines than now\nand more\nand more\n").unwrap();

    split_file(&path, &SplitOptions::default()).unwrap();

    assert!(!read_cp866(&stale).contains("old run"));
}

#[test]
fn test_crlf_input_is_written_with_lf() {
    let (dir, path) = write_report("crlf.txt", "head\r\n\\six Невский\r\n");

    split_file(&path, &SplitOptions::default()).unwrap();

    // "Невский" in CP866
    let mut expected = b"head\n\\six ".to_vec();
    expected.extend_from_slice(&[0x8D, 0xA5, 0xA2, 0xE1, 0xAA, 0xA8, 0xA9]);
    expected.push(b'\n');
    assert_eq!(fs::read(dir.path().join("crlf-nev.txt")).unwrap(), expected);
}

#[test]
fn test_cr_only_input_is_split_per_line() {
    let (dir, path) = write_report("mac.txt", "intro\r\\six Невский\rtail\r");

    let report = split_file(&path, &SplitOptions::default()).unwrap();

    assert_eq!(report.total_lines, 3);
    assert_eq!(
        read_cp866(&dir.path().join("mac-nev.txt")),
        "intro\n\\six Невский\ntail\n"
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let err = split_file(&dir.path().join("absent.txt"), &SplitOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        district_splitter::SplitterError::ReadInput { .. }
    ));
}

//! Integration tests for dirtree


use std::fs;

use harness::{TestDir, child_names, run_dirtree, run_json_tree, sample_dir};

#[test]
fn test_default_output_is_json_names() {
    let dir = sample_dir();

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &[]);
    assert!(success, "dirtree should succeed");
    let tree: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tree["name"], ".");
    assert_eq!(child_names(&tree), vec!["a.txt", "b.go", "sub"]);
    // Default field exclusions leave only names and children
    assert!(tree["children"][0].get("size").is_none());
    assert!(tree["children"][0].get("type").is_none());
    // Default depth is 1, so sub is a leaf
    assert!(tree["children"][2].get("children").is_none());
}

#[test]
fn test_full_tree_scenario() {
    let dir = sample_dir();
    let tree = run_json_tree(dir.path(), &["-d", "-1"]);

    assert_eq!(child_names(&tree), vec!["a.txt", "b.go", "sub"]);
    assert_eq!(tree["children"][0]["size"], 10);
    assert_eq!(tree["children"][1]["size"], 5);
    assert_eq!(tree["children"][2]["type"], "directory");
    assert_eq!(child_names(&tree["children"][2]), vec!["c.go"]);
}

#[test]
fn test_exclude_types_scenario() {
    let dir = sample_dir();
    let tree = run_json_tree(dir.path(), &["-d", "-1", "-t", ".go"]);

    assert_eq!(child_names(&tree), vec!["a.txt", "sub"]);
    assert!(child_names(&tree["children"][1]).is_empty());
}

#[test]
fn test_positional_and_path_flag() {
    let dir = sample_dir();
    let root = dir.path().to_string_lossy().to_string();

    let by_flag = run_json_tree(dir.path(), &["-p", &root]);
    let positional = run_json_tree(dir.path(), &[&root]);
    assert_eq!(by_flag, positional);
    assert_eq!(by_flag["path"], root.as_str());
}

#[test]
fn test_missing_root_fails() {
    let dir = TestDir::new();
    let (_stdout, stderr, success) = run_dirtree(dir.path(), &["/nonexistent/dirtree", "-d", "1"]);
    assert!(!success, "missing root should fail");
    assert!(
        stderr.contains("error accessing path /nonexistent/dirtree"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::new();
    dir.add_file("top.txt", "t");
    dir.add_file("level1/mid.txt", "m");
    dir.add_file("level1/level2/deep.txt", "d");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-f", "txt", "-d", "2"]);
    assert!(success);
    assert!(stdout.contains("top.txt"));
    assert!(stdout.contains("mid.txt"));
    assert!(stdout.contains("level2"));
    assert!(!stdout.contains("deep.txt"), "should not show deep files: {}", stdout);
}

#[test]
fn test_no_files() {
    let dir = TestDir::new();
    dir.add_file("file.txt", "f");
    dir.add_file("subdir/nested/inner.txt", "i");

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &["--no-files", "-d", "-1", "-f", "txt"]);
    assert!(success);
    assert!(!stdout.contains("file.txt"), "should not show files: {}", stdout);
    assert!(!stdout.contains("inner.txt"));
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("nested"));
}

#[test]
fn test_default_excludes_git_dir() {
    let dir = TestDir::new();
    dir.add_file(".git/HEAD", "ref: refs/heads/main");
    dir.add_file("main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-f", "txt"]);
    assert!(success);
    assert!(!stdout.contains(".git"), "got: {}", stdout);
    assert!(stdout.contains("main.rs"));

    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-f", "txt", "-e", ""]);
    assert!(success);
    assert!(stdout.contains(".git"), "empty exclude list shows .git: {}", stdout);
}

#[test]
fn test_txt_output() {
    let dir = sample_dir();
    dir.add_file(".env", "X=1");

    let (stdout, _stderr, success) = run_dirtree(
        dir.path(),
        &["-f", "txt", "-d", "-1", "--exclude-fields", "", "--color", "never"],
    );
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    // "." is a dotfile name too
    assert_eq!(lines[0], "📁 . [hidden]");
    assert!(lines.contains(&"  📄 .env (3 bytes) [hidden]"), "got:\n{}", stdout);
    assert!(lines.contains(&"  📄 a.txt (10 bytes)"));
    assert!(lines.contains(&"    📄 c.go (9 bytes)"));
    assert!(!stdout.contains("\x1b["), "no color codes when disabled");
}

#[test]
fn test_yaml_output() {
    let dir = sample_dir();
    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-f", "yaml"]);
    assert!(success);
    assert!(stdout.starts_with("name: "), "got:\n{}", stdout);
    assert!(stdout.contains("- name: a.txt"));
}

#[test]
fn test_xml_output() {
    let dir = sample_dir();
    let (stdout, _stderr, success) = run_dirtree(dir.path(), &["-f", "xml"]);
    assert!(success);
    assert!(stdout.starts_with("<?xml"));
    assert!(stdout.contains("<name>a.txt</name>"));
    assert!(stdout.contains("<children>"));
}

#[test]
fn test_unsupported_format_fails() {
    let dir = sample_dir();
    let (_stdout, stderr, success) = run_dirtree(dir.path(), &["-f", "csv"]);
    assert!(!success);
    assert!(stderr.contains("unsupported format: csv"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_field_fails() {
    let dir = sample_dir();
    let (_stdout, stderr, success) = run_dirtree(dir.path(), &["--exclude-fields", "name,sise"]);
    assert!(!success);
    assert!(stderr.contains("unknown node field: sise"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_depth_fails() {
    let dir = sample_dir();
    let (_stdout, stderr, success) = run_dirtree(dir.path(), &["-d", "-3"]);
    assert!(!success);
    assert!(stderr.contains("max depth"), "stderr: {}", stderr);
}

#[test]
fn test_output_file_gets_extension() {
    let dir = sample_dir();
    let out = TestDir::new();
    let target = out.path().join("snapshot");

    let (stdout, _stderr, success) =
        run_dirtree(dir.path(), &["-f", "yaml", "-o", &target.to_string_lossy()]);
    assert!(success);
    let written = out.path().join("snapshot.yaml");
    assert!(written.exists(), "expected {} to exist", written.display());
    assert!(stdout.contains("Tree successfully written to:"));
    let content = fs::read_to_string(written).unwrap();
    assert!(content.contains("name: a.txt"));
}

#[test]
fn test_config_file_with_override() {
    let dir = sample_dir();
    let config = dir.add_file(
        "dirtree.yaml",
        "max_depth: -1\nexclude_types: [\".go\"]\nformat:\n  type: json\n  indent: 0\n",
    );

    let (stdout, stderr, success) =
        run_dirtree(dir.path(), &["-c", &config.to_string_lossy()]);
    assert!(success, "stderr: {}", stderr);
    let tree: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(child_names(&tree), vec!["a.txt", "dirtree.yaml", "sub"]);
    assert!(child_names(&tree["children"][2]).is_empty());
    assert_eq!(stdout.lines().count(), 1, "indent 0 gives compact JSON");

    // Flags typed on the command line win over the file
    let (stdout, _stderr, success) = run_dirtree(
        dir.path(),
        &["-c", &config.to_string_lossy(), "-t", ".txt,.yaml"],
    );
    assert!(success);
    let tree: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(child_names(&tree), vec!["b.go", "sub"]);
}

#[test]
fn test_config_file_missing() {
    let dir = TestDir::new();
    let (_stdout, stderr, success) = run_dirtree(dir.path(), &["-c", "missing.json"]);
    assert!(!success);
    assert!(stderr.contains("error reading config file"), "stderr: {}", stderr);
}

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use ghost_core::{ghost_id_for, GhostRegistry, Mode};
use ghost_scan::{collect_files, scan_at, scan_entries_at, ScanError};

const LOGIN_FORM: &str = r#"
import { useGhost } from '@ghost-id/react';

export const LoginForm = () => {
  const formId = useGhost();
  const usernameId = useGhost('username');
  const passwordId = useGhost('password');
  const submitId = useGhost('submit');
  return (
    <form data-gh={formId}>
      <input data-gh={usernameId} />
      <input data-gh={passwordId} type="password" />
      <button data-gh={submitId}>Sign in</button>
    </form>
  );
};
"#;

const LOGIN_BUTTON: &str = r#"
export function LoginButton() {
  return <button data-gh={useGhost()}>Log in</button>;
}
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write fixture");
}

fn fixture() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "src/components/LoginForm.tsx", LOGIN_FORM);
    write(dir.path(), "src/components/LoginButton.jsx", LOGIN_BUTTON);
    write(dir.path(), "src/styles.css", ".x { color: red; }");
    write(
        dir.path(),
        "src/node_modules/lib/index.js",
        "function Vendored() { useGhost('vendor'); }",
    );
    write(
        dir.path(),
        "src/__tests__/Form.test.tsx",
        "function Spec() { useGhost('spec'); }",
    );
    dir
}

#[test]
fn directory_scan_uses_render_index_one() {
    let dir = fixture();
    let ids = scan_at(dir.path(), "src").expect("scan");

    let keys: Vec<&str> = ids.keys().map(String::as_str).collect();
    // Files are visited in sorted path order: LoginButton.jsx before LoginForm.tsx.
    assert_eq!(
        keys,
        [
            "LoginButton",
            "LoginForm",
            "LoginForm-username",
            "LoginForm-password",
            "LoginForm-submit",
        ]
    );
    assert_eq!(ids["LoginButton"], "gh-LoginButton-5608gm");
    assert_eq!(ids["LoginForm"], "gh-LoginForm-dkbpz0");
    assert_eq!(ids["LoginForm-submit"], "gh-LoginForm-submit-vu3jz0");
    assert_eq!(ids["LoginForm-username"], ghost_id_for("LoginForm", Some("username"), 1));
}

#[test]
fn excluded_directories_are_skipped() {
    let dir = fixture();
    let ids = scan_at(dir.path(), "src").expect("scan");
    assert!(!ids.contains_key("Vendored-vendor"));
    assert!(!ids.contains_key("Spec-spec"));
}

#[test]
fn single_mount_components_match_runtime() {
    let dir = fixture();
    let ids = scan_at(dir.path(), "src/components/LoginButton.jsx").expect("scan");

    let mut registry = GhostRegistry::new(Mode::Development);
    let runtime = registry.get_or_create("LoginButton", None);
    assert_eq!(ids.get("LoginButton"), Some(&runtime));
    assert_eq!(ids.len(), 1);
}

#[rstest]
#[case("src/**/*.tsx", 1)]
#[case("src/**/*.{ts,tsx,js,jsx}", 2)]
#[case("src/components", 2)]
#[case("src/components/LoginForm.tsx", 1)]
fn patterns_select_files(#[case] pattern: &str, #[case] expected: usize) {
    let dir = fixture();
    let files = collect_files(dir.path(), pattern).expect("collect");
    assert_eq!(files.len(), expected, "{pattern}: {files:?}");
}

#[test]
fn missing_base_path_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let err = scan_at(dir.path(), "nope/**/*.tsx").unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }), "{err}");
}

#[test]
fn no_call_sites_yields_empty_map() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "src/util.ts", "export const add = (a: number, b: number) => a + b;\n");
    let ids = scan_at(dir.path(), "src").expect("scan");
    assert!(ids.is_empty());
}

#[test]
fn non_utf8_files_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join("src")).expect("mkdir");
    fs::write(dir.path().join("src/bad.ts"), [0xff, 0xfe, 0x00]).expect("write");
    write(dir.path(), "src/ok.tsx", LOGIN_BUTTON);
    let ids = scan_at(dir.path(), "src").expect("scan");
    assert_eq!(ids.len(), 1);
}

#[test]
fn duplicate_keys_keep_first_position() {
    let dir = TempDir::new().expect("tempdir");
    write(
        dir.path(),
        "src/a.tsx",
        "function Nav() { useGhost('home'); useGhost('about'); }\n",
    );
    write(dir.path(), "src/b.tsx", "function Nav() { useGhost('home'); }\n");

    let entries = scan_entries_at(dir.path(), "src").expect("scan");
    let keys: Vec<String> = entries.iter().map(|e| e.composite_key()).collect();
    assert_eq!(keys, ["Nav-home", "Nav-about"]);
    assert!(entries.iter().all(|e| e.render_index == 1));
    assert_eq!(entries[0].alias.as_deref(), Some("home"));
}

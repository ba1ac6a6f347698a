//! Integration tests for the `dfa-reach` and `dfa-tool` binaries

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::{Command, Output};
    use tempfile::TempDir;

    use dfa_reach::cli::paths::PersistentConfig;
    use dfa_reach::prelude::TableLayout;

    const EXAMPLE: &str = "2 2 0 1 1\n0 0 0  0 1 1  1 0 1  1 1 1\n";

    /// A scratch directory holding an automaton and an isolated config file
    struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("test_automat"), EXAMPLE).unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn config(&self) -> PathBuf {
            self.path("config.json")
        }

        fn run(&self, bin: &str, args: &[&str]) -> Output {
            Command::new(bin)
                .args(args)
                .arg("-c")
                .arg(self.config())
                .current_dir(self.dir.path())
                .env_remove("RUST_LOG")
                .output()
                .unwrap()
        }

        fn reach(&self, args: &[&str]) -> Output {
            self.run(env!("CARGO_BIN_EXE_dfa-reach"), args)
        }

        fn tool(&self, args: &[&str]) -> Output {
            self.run(env!("CARGO_BIN_EXE_dfa-tool"), args)
        }
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    }

    fn arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn test_acceptable_words() {
        let ws = Workspace::new();

        let output = ws.reach(&["", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are acceptable");

        let output = ws.reach(&["0", ""]);
        assert_eq!(stdout(&output), "Words are acceptable");
    }

    #[test]
    fn test_not_acceptable_words() {
        let ws = Workspace::new();
        fs::write(ws.path("test_automat"), "2 2 0 1 1\n0 0 0 0 1 0 1 0 1 1 1 1\n").unwrap();

        let output = ws.reach(&["", "0 0"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are not acceptable");
    }

    #[test]
    fn test_annotated_default_automaton() {
        let ws = Workspace::new();

        fs::write(ws.path("test_automat"), "δ = {2 2 0 1 1}\n0 0 0  0 1 1  1 0 1  1 1 1\n").unwrap();
        let output = ws.reach(&["", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are acceptable");

        fs::write(ws.path("test_automat"), "{2 2 0 1 1 (0 0 0) (0 1 1) (1 0 1) (1 1 1)}").unwrap();
        let output = ws.reach(&["", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are acceptable");
    }

    #[test]
    fn test_explicit_automaton_path() {
        let ws = Workspace::new();
        let other = ws.path("other.txt");
        fs::write(&other, "1 1 0 0\n0 0 0\n").unwrap();

        let output = ws.reach(&["0 0 0", "", "-a", arg(&other)]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are not acceptable");
    }

    #[test]
    fn test_missing_automaton_exits_with_io_code() {
        let ws = Workspace::new();
        fs::remove_file(ws.path("test_automat")).unwrap();

        let output = ws.reach(&["", ""]);
        assert_eq!(output.status.code(), Some(3));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("test_automat"));
    }

    #[test]
    fn test_malformed_automaton_exits_with_format_code() {
        let ws = Workspace::new();
        fs::write(ws.path("test_automat"), "2 2 0").unwrap();

        let output = ws.reach(&["", ""]);
        assert_eq!(output.status.code(), Some(4));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_out_of_range_symbol_exits_with_index_code() {
        let ws = Workspace::new();

        let output = ws.reach(&["5", ""]);
        assert_eq!(output.status.code(), Some(5));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_missing_word_is_usage_error() {
        let ws = Workspace::new();
        let output = ws.reach(&["0"]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_legacy_layout_flag() {
        let ws = Workspace::new();
        // Three symbols over two states: the legacy offsets read cells 0..=4
        let legacy = ws.path("legacy.txt");
        fs::write(&legacy, "3 2 0 1 1\n0 0 0 0 1 0 0 2 1 0 0 1 0 0 1 0 0 1\n").unwrap();

        let output = ws.reach(&["", "2", "-a", arg(&legacy), "--layout", "legacy"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are acceptable");

        // The same stream is rejected by the state-major layout
        let output = ws.reach(&["", "2", "-a", arg(&legacy)]);
        assert_eq!(output.status.code(), Some(4));
    }

    #[test]
    fn test_tool_check_matches_reach() {
        let ws = Workspace::new();
        let output = ws.tool(&["check", "", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "Words are acceptable");
    }

    #[test]
    fn test_tool_reach_queries() {
        let ws = Workspace::new();

        let output = ws.tool(&["reach", "0", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "reachable");

        let output = ws.tool(&["reach", "1", "0"]);
        assert_eq!(stdout(&output), "unreachable");

        let output = ws.tool(&["reach", "1"]);
        assert_eq!(stdout(&output), "1");

        let output = ws.tool(&["reach", "0"]);
        assert_eq!(stdout(&output), "0 1");

        let output = ws.tool(&["reach", "7", "0"]);
        assert_eq!(output.status.code(), Some(5));
    }

    #[test]
    fn test_tool_info() {
        let ws = Workspace::new();
        let output = ws.tool(&["info"]);
        assert_eq!(output.status.code(), Some(0));

        let text = stdout(&output);
        assert!(text.contains("2 symbol(s)"));
        assert!(text.contains("2 of 2 state(s)"));
    }

    #[test]
    fn test_tool_convert_and_check() {
        let ws = Workspace::new();
        let json = ws.path("automaton.json");

        let output = ws.tool(&["convert", arg(&ws.path("test_automat")), arg(&json)]);
        assert_eq!(output.status.code(), Some(0));
        assert!(json.exists());

        let output = ws.reach(&["0", "", "-a", arg(&json)]);
        assert_eq!(stdout(&output), "Words are acceptable");
    }

    #[test]
    fn test_tool_settings_persist() {
        let ws = Workspace::new();
        let other = ws.path("other.txt");
        fs::write(&other, "1 1 0 0\n0 0 0\n").unwrap();

        let output = ws.tool(&["settings", "--set-automaton", arg(&other), "--set-layout", "legacy"]);
        assert_eq!(output.status.code(), Some(0));

        let config = PersistentConfig::load_from(Some(&ws.config())).unwrap();
        assert_eq!(config.automaton_path, Some(other));
        assert_eq!(config.layout, Some(TableLayout::Legacy));

        let output = ws.reach(&["", ""]);
        assert_eq!(stdout(&output), "Words are not acceptable");

        let output = ws.tool(&["settings", "--reset"]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            PersistentConfig::load_from(Some(&ws.config())).unwrap(),
            PersistentConfig::default()
        );
    }

    #[test]
    fn test_settings_without_changes_does_not_write() {
        let ws = Workspace::new();
        let output = ws.tool(&["settings"]);
        assert_eq!(output.status.code(), Some(0));
        assert!(!ws.config().exists());
    }

    #[test]
    fn test_config_must_be_json() {
        let ws = Workspace::new();
        let output = Command::new(env!("CARGO_BIN_EXE_dfa-reach"))
            .args(["", "", "-c", arg(&ws.path("config.toml"))])
            .current_dir(ws.dir.path())
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
    }
}

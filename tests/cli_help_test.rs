#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("ingext").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Commands:"));

        // Verify that major command groups are present
        for command in ["config", "auth", "eks", "integration", "stream"] {
            assert!(help_output.contains(command), "missing {}", command);
        }

        assert!(help_output.contains("--cluster"));
        assert!(help_output.contains("-n, --namespace"));
        assert!(help_output.contains("--context"));
        assert!(help_output.contains("-V, --version"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        let expected = [
            ("config", vec!["list", "delete", "view", "path", "--provider"]),
            ("auth", vec!["add-user", "del-user", "list-user"]),
            (
                "eks",
                vec!["add-assumed-role", "del-assumed-role", "list-assumed-role"],
            ),
            ("integration", vec!["add", "del", "list"]),
            ("stream", vec!["add-source", "add-sink", "add-router"]),
        ];

        for (subcommand, entries) in expected {
            let mut cmd = Command::cargo_bin("ingext").unwrap();
            let assert_result = cmd.arg(subcommand).arg("--help").assert().success();
            let help_output = String::from_utf8_lossy(&assert_result.get_output().stdout).to_string();

            for entry in entries {
                assert!(
                    help_output.contains(entry),
                    "'{}' help is missing {}",
                    subcommand,
                    entry
                );
            }
        }
    }

    #[test]
    fn test_integration_add_help_lists_typed_parameters() {
        let mut cmd = Command::cargo_bin("ingext").unwrap();
        cmd.args(["integration", "add", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--config <KEY=VALUE>"))
            .stdout(predicate::str::contains("--config-int <KEY=INT>"))
            .stdout(predicate::str::contains("--config-json <KEY=JSON>"))
            .stdout(predicate::str::contains("--secret <KEY=VALUE>"));
    }
}

#[cfg(test)]
mod config_command_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    /// Runs the binary against a private profile document in `dir`.
    fn ingext(dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("ingext").unwrap();
        cmd.env("INGEXT_CONFIG_DIR", dir)
            .env_remove("INGEXT_CLUSTER")
            .env_remove("INGEXT_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_config_then_list_marks_active() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["config", "--cluster", "dev", "--provider", "aks"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Configuration saved for cluster 'dev'.",
            ));
        ingext(dir.path())
            .args(["config", "--cluster", "prod", "-n", "ingext-prod"])
            .assert()
            .success();

        let output = ingext(dir.path())
            .args(["config", "list"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("CURRENT"));
        assert!(lines[1].contains("dev") && lines[1].contains("aks") && !lines[1].contains('*'));
        assert!(lines[2].contains("prod") && lines[2].contains('*'));
        assert!(lines[2].contains("ingext-prod"));

        let document = std::fs::read_to_string(dir.path().join("config.yaml")).unwrap();
        assert!(document.contains("current-cluster: prod"));
    }

    #[test]
    fn test_config_updates_active_profile_in_place() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["config", "--cluster", "prod", "-n", "ingext-prod"])
            .assert()
            .success();
        ingext(dir.path())
            .args(["config", "--context", "prod-ctx"])
            .assert()
            .success()
            .stderr(predicate::str::contains("cluster 'prod'"));

        ingext(dir.path())
            .args(["config", "view", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"namespace\":\"ingext-prod\""))
            .stdout(predicate::str::contains("\"context\":\"prod-ctx\""))
            .stdout(predicate::str::contains("\"provider\":\"eks\""));
    }

    #[test]
    fn test_config_without_cluster_fails() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["config", "--provider", "eks"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cluster name is required"));
    }

    #[test]
    fn test_delete_active_profile_warns() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["config", "--cluster", "prod"])
            .assert()
            .success();
        ingext(dir.path())
            .args(["config", "delete", "prod"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Warning: You deleted the currently active cluster context.",
            ));

        ingext(dir.path())
            .args(["config", "delete", "prod"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cluster 'prod' not found"));
    }

    #[test]
    fn test_config_path_honours_directory_override() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                dir.path().join("config.yaml").display().to_string(),
            ));
    }

    #[test]
    fn test_resource_command_requires_cluster() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args(["integration", "list"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cluster name is required"));
    }

    #[test]
    fn test_bad_config_json_fails_before_cluster_access() {
        let dir = TempDir::new().unwrap();

        // the context points at an unusable kubeconfig; assembly must fail first
        ingext(dir.path())
            .env("KUBECONFIG", dir.path().join("missing-kubeconfig"))
            .args([
                "integration",
                "add",
                "--cluster",
                "prod",
                "--integration",
                "aws_s3",
                "--name",
                "logs",
                "--config-json",
                "ports=[80,",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("key 'ports'"))
            .stderr(predicate::str::contains("kubeconfig").not());
    }

    #[test]
    fn test_missing_file_names_key() {
        let dir = TempDir::new().unwrap();

        ingext(dir.path())
            .args([
                "stream",
                "add-router",
                "--cluster",
                "prod",
                "--name",
                "main",
                "--config",
                "rules=@/nonexistent/ingext/rules.json",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("key 'rules'"));
    }

    #[test]
    fn test_unwritable_config_dir_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        ingext(&blocker.join("ingext"))
            .args(["config", "--cluster", "prod"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("failed to create configuration directory"));
    }

}

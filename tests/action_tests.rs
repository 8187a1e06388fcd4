#[cfg(test)]
mod tests {
    use electron_release_action::cli::OutputManager;
    use electron_release_action::{
        ActionError, CommandExecutor, ConfigError, ExecutionError, Inputs, PackagerCommand,
        PackagerEnv, Platform, Runner,
    };

    struct AlwaysFails {
        calls: u32,
    }

    impl CommandExecutor for AlwaysFails {
        fn run(&mut self, command: &PackagerCommand) -> Result<(), ExecutionError> {
            self.calls += 1;
            Err(ExecutionError::NonZeroExit {
                command: command.to_string(),
                code: Some(self.calls as i32),
            })
        }
    }

    fn runner() -> Runner<AlwaysFails> {
        Runner::new(AlwaysFails { calls: 0 }, OutputManager::new(false, true))
    }

    #[test]
    fn test_every_missing_required_input_means_no_invocation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let root = dir.path().display().to_string();
        let all = [
            ("release", "true"),
            ("package_root", root.as_str()),
            ("gh_token", "token"),
            ("node_env", "production"),
            ("publish_type", "release"),
            ("appleid", "dev@example.com"),
            ("appleidpass", "secret"),
        ];

        for platform in [Platform::Linux, Platform::Mac, Platform::Windows] {
            for skipped in 0..all.len() {
                let name = all[skipped].0;
                let required_here = platform == Platform::Mac || !name.starts_with("appleid");
                if !required_here {
                    continue;
                }

                let inputs = Inputs::from_pairs(
                    all.iter()
                        .enumerate()
                        .filter(|(i, _)| *i != skipped)
                        .map(|(_, (k, v))| (*k, v.to_string())),
                );
                let mut runner = runner();
                let err = runner.run(&inputs, platform).unwrap_err();
                assert!(
                    matches!(err, ActionError::Config(ConfigError::MissingInput { .. })),
                    "{platform}: expected missing {name}, got {err}"
                );
                assert_eq!(runner.executor().calls, 0);
            }
        }
    }

    #[test]
    fn test_second_failure_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        let inputs = Inputs::from_vars([
            ("INPUT_RELEASE", "false".to_string()),
            ("INPUT_PACKAGE_ROOT", dir.path().display().to_string()),
            ("INPUT_MAX_ATTEMPTS", "2".to_string()),
            ("INPUT_GH_TOKEN", "token".to_string()),
            ("INPUT_NODE_ENV", "production".to_string()),
            ("INPUT_PUBLISH_TYPE", "never".to_string()),
        ]);

        let mut runner = runner();
        let err = runner.run(&inputs, Platform::Linux).unwrap_err();
        assert_eq!(runner.executor().calls, 2);
        assert!(err.to_string().contains("exit code 2"));
    }

    #[test]
    fn test_packager_env_never_blanks_a_value() {
        let mut env = PackagerEnv::new();
        env.set("NODE_ENV", Some("production"));
        env.set("NODE_ENV", Some(""));
        env.set::<String>("NODE_ENV", None);
        assert_eq!(env.get("NODE_ENV"), Some("production"));
    }
}

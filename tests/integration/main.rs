//! Integration tests for pkgsize

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated from the user's config and working directory
    fn pkgsize(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("pkgsize");
        cmd.current_dir(temp.path())
            .env_remove("PKGSIZE_CONFIG")
            .arg("--config")
            .arg(temp.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("disk footprint"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pkgsize"));
    }

    #[test]
    fn cache_path_defaults_to_working_directory_file() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .args(["cache", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pypi_package_sizes.json"));
    }

    #[test]
    fn cache_show_lists_entries() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pypi_package_sizes.json"),
            "{\n  \"numpy\": 1073741824,\n  \"six\": 0\n}",
        )
        .unwrap();

        pkgsize(&temp)
            .args(["cache", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("numpy"))
            .stdout(predicate::str::contains("Total: 2 package(s), 1.00 GB"));
    }

    #[test]
    fn cache_show_json() {
        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("sizes.json");
        std::fs::write(&cache, "{\"requests\": 42}").unwrap();

        pkgsize(&temp)
            .arg("--cache-file")
            .arg(&cache)
            .args(["cache", "show", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"requests\": 42"));
    }

    #[test]
    fn corrupt_cache_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pypi_package_sizes.json"), "[1, 2]").unwrap();

        pkgsize(&temp)
            .args(["cache", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a valid size cache"))
            .stderr(predicate::str::contains("pkgsize cache clear"));
    }

    #[test]
    fn cache_clear_with_yes() {
        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("pypi_package_sizes.json");
        std::fs::write(&cache, "{}").unwrap();

        pkgsize(&temp)
            .args(["cache", "clear", "--yes"])
            .assert()
            .success();
        assert!(!cache.exists());
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[sources]"))
            .stdout(predicate::str::contains("pypi.org"));
    }

    #[test]
    fn config_init_then_invalid_edit_fails() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp).args(["config", "init"]).assert().success();
        assert!(temp.path().join("config.toml").exists());

        std::fs::write(temp.path().join("config.toml"), "[http]\ntimeout_secs = -1\n").unwrap();
        pkgsize(&temp)
            .args(["config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn estimate_unreachable_ranking_fails() {
        let temp = TempDir::new().unwrap();
        pkgsize(&temp)
            .args([
                "estimate",
                "10",
                "--ranking-url",
                "http://127.0.0.1:9/top.json",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to fetch package ranking"));
        assert!(!temp.path().join("pypi_package_sizes.json").exists());
    }
}

mod registry_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::collections::HashMap;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use tempfile::TempDir;

    const RANKING: &str =
        r#"{"last_update":"2026-10-01","rows":[{"project":"alpha","download_count":10},{"project":"beta"}]}"#;
    const ALPHA: &str = r#"{"info":{"version":"1.0"},"releases":{"0.9":[{"size":7}],"1.0":[{"size":100},{"size":50}]}}"#;

    /// Local HTTP/1.1 server answering canned bodies by request path
    struct StubServer {
        base: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl StubServer {
        fn start(routes: &[(&str, u16, &str)]) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let base = format!("http://{}", listener.local_addr().unwrap());
            let routes: HashMap<String, (u16, String)> = routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                .collect();
            let requests = Arc::new(Mutex::new(Vec::new()));
            let seen = Arc::clone(&requests);

            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(mut stream) = stream else { continue };
                    let Ok(read_half) = stream.try_clone() else { continue };
                    let mut reader = BufReader::new(read_half);

                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).is_err() {
                        continue;
                    }
                    loop {
                        let mut header = String::new();
                        match reader.read_line(&mut header) {
                            Ok(0) | Err(_) => break,
                            Ok(_) if header.trim_end().is_empty() => break,
                            Ok(_) => {}
                        }
                    }

                    let path = request_line
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or_default()
                        .to_string();
                    seen.lock().unwrap().push(path.clone());

                    let (status, body) = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));
                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason(status),
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
            });

            Self { base, requests }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base, path)
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn metadata_requests(&self) -> usize {
            self.requests()
                .iter()
                .filter(|path| path.starts_with("/pypi/"))
                .count()
        }
    }

    fn reason(status: u16) -> &'static str {
        match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }

    /// `estimate` pointed at the stub server, isolated in `temp`
    fn estimate(temp: &TempDir, server: &StubServer) -> Command {
        let mut cmd = cargo_bin_cmd!("pkgsize");
        cmd.current_dir(temp.path())
            .env_remove("PKGSIZE_CONFIG")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("estimate")
            .arg("--ranking-url")
            .arg(server.url("/top.json"))
            .arg("--metadata-url")
            .arg(server.url("/pypi/{package}/json"));
        cmd
    }

    fn cache_contents(temp: &TempDir) -> serde_json::Value {
        let raw = std::fs::read_to_string(temp.path().join("pypi_package_sizes.json")).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn ranking_error_status_fails() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[("/top.json", 500, "upstream down")]);

        estimate(&temp, &server)
            .arg("5")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to fetch package ranking"));
        assert_eq!(server.requests(), vec!["/top.json"]);
        assert!(!temp.path().join("pypi_package_sizes.json").exists());
    }

    #[test]
    fn ranking_without_rows_fails() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[("/top.json", 200, r#"{"last_update":"2026-10-01"}"#)]);

        estimate(&temp, &server)
            .arg("5")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed package ranking"));
        assert_eq!(server.metadata_requests(), 0);
    }

    #[test]
    fn missing_package_counts_zero_and_is_cached() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[
            ("/top.json", 200, RANKING),
            ("/pypi/alpha/json", 200, ALPHA),
        ]);

        estimate(&temp, &server)
            .arg("2")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Estimated total size of top 2 packages: 0.00 GB",
            ))
            .stdout(predicate::str::contains("Failed to fetch size for beta"));

        let requests = server.requests();
        assert!(requests.contains(&"/pypi/alpha/json".to_string()));
        assert!(requests.contains(&"/pypi/beta/json".to_string()));
        assert_eq!(
            cache_contents(&temp),
            serde_json::json!({"alpha": 150, "beta": 0})
        );
    }

    #[test]
    fn second_run_makes_no_metadata_requests() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[
            ("/top.json", 200, RANKING),
            ("/pypi/alpha/json", 200, ALPHA),
        ]);

        estimate(&temp, &server).arg("2").assert().success();
        assert_eq!(server.metadata_requests(), 2);

        estimate(&temp, &server)
            .arg("2")
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to fetch size").not());
        assert_eq!(server.metadata_requests(), 2);
    }

    #[test]
    fn json_report_keeps_stdout_parseable() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[
            ("/top.json", 200, RANKING),
            ("/pypi/alpha/json", 200, ALPHA),
        ]);

        let output = estimate(&temp, &server)
            .args(["2", "--json"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to fetch size for beta"))
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["requested"], 2);
        assert_eq!(report["total_bytes"], 150);
        assert_eq!(report["lookups"], 2);
        assert_eq!(report["failures"], 1);
    }

    #[test]
    fn json_report_with_prompted_count() {
        let temp = TempDir::new().unwrap();
        let server = StubServer::start(&[
            ("/top.json", 200, RANKING),
            ("/pypi/alpha/json", 200, ALPHA),
        ]);

        let output = estimate(&temp, &server)
            .arg("--json")
            .write_stdin("1\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("Enter the number of top packages"))
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["requested"], 1);
        assert_eq!(report["total_bytes"], 150);
        assert_eq!(server.metadata_requests(), 1);
    }
}

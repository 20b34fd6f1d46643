use riot_caller::{AppError, Config, Params, RiotCaller, Scope};
use std::fs;
use std::path::PathBuf;

fn write_catalog(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("riot_caller_test_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config_with(path: PathBuf) -> Config {
    Config {
        catalog_path: Some(path),
        ..Config::default()
    }
}

const ESPORTS_CATALOG: &str = r#"
[[groups]]
name = "status"
scope = "server"

[[groups.services]]
name = "get_status"
url = "/status/v1/ping"
required_params = []
is_params_required = false

[[groups]]
name = "teams"
scope = "region"

[[groups.services]]
name = "get_team"
url = "/teams/v1/{teamId}/roster/{season}"
required_params = ["teamId", "season"]
"#;

#[test]
fn file_backed_catalog_replaces_embedded_one() {
    let path = write_catalog("esports.toml", ESPORTS_CATALOG);
    let riot = RiotCaller::new(&config_with(path)).unwrap();

    assert_eq!(riot.catalog().len(), 2);
    assert_eq!(riot.catalog().groups()[1].scope, Scope::Region);
    assert!(matches!(
        riot.catalog().lookup("get_league_by_id"),
        Err(AppError::ServiceNotFound(_))
    ));

    let params: Params = [("teamId", "T1"), ("season", "2024")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        riot.build_url("get_team", &params).unwrap(),
        "https://americas.api.riotgames.com/teams/v1/T1/roster/2024"
    );
    assert_eq!(
        riot.build_url("get_status", &Params::new()).unwrap(),
        "https://br1.api.riotgames.com/status/v1/ping"
    );
}

#[test]
fn missing_catalog_file_fails_construction() {
    let path = std::env::temp_dir().join("riot_caller_no_such_catalog.toml");
    let result = RiotCaller::new(&config_with(path));
    assert!(matches!(result, Err(AppError::ConfigurationLoad { .. })));
}

#[test]
fn malformed_catalog_file_fails_construction() {
    let path = write_catalog("broken.toml", "[[groups]]\nname = 42\n");
    let result = RiotCaller::new(&config_with(path));
    assert!(matches!(result, Err(AppError::ConfigurationLoad { .. })));
}

#[test]
fn duplicate_service_in_file_fails_construction() {
    let path = write_catalog(
        "dup.toml",
        r#"
[[groups]]
name = "a"
scope = "server"
[[groups.services]]
name = "get_thing"
url = "/a"
is_params_required = false

[[groups]]
name = "b"
scope = "region"
[[groups.services]]
name = "get_thing"
url = "/b"
is_params_required = false
"#,
    );
    let result = RiotCaller::new(&config_with(path));
    assert!(matches!(result, Err(AppError::InvalidCatalog(_))));
}

#[test]
fn unknown_scope_in_file_fails_construction() {
    let path = write_catalog(
        "scope.toml",
        "[[groups]]\nname = \"x\"\nscope = \"esports\"\n",
    );
    let result = RiotCaller::new(&config_with(path));
    assert!(matches!(result, Err(AppError::UnknownScope(s)) if s == "esports"));
}

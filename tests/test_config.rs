use roster::config::Config;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

// Env vars are process-wide; serialize the tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    unsafe {
        std::env::remove_var("ROSTER_CONFIG");
        std::env::remove_var("ROSTER_LISTEN");
        std::env::remove_var("ROSTER_DB");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = Config::load().unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3999");
    assert_eq!(cfg.server.max_request_bytes, 4096);
    assert_eq!(cfg.server.max_connections, 64);
    assert_eq!(cfg.store.db_path, PathBuf::from("test.db"));
}

#[test]
fn test_listen_override_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("ROSTER_LISTEN", "0.0.0.0:3000");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");

    clear_env();
}

#[test]
fn test_db_override_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("ROSTER_DB", "/tmp/other.db");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.store.db_path, PathBuf::from("/tmp/other.db"));

    clear_env();
}

#[test]
fn test_config_from_yaml_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "server:\n  listen_addr: \"127.0.0.1:4001\"\n  max_request_bytes: 8192\n  max_connections: 8\nstore:\n  db_path: \"records.db\"\n"
    )
    .unwrap();
    unsafe {
        std::env::set_var("ROSTER_CONFIG", file.path());
    }

    let cfg = Config::load().unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:4001");
    assert_eq!(cfg.server.max_request_bytes, 8192);
    assert_eq!(cfg.server.max_connections, 8);
    assert_eq!(cfg.store.db_path, PathBuf::from("records.db"));

    clear_env();
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  listen_addr: \"127.0.0.1:4002\"\n").unwrap();
    unsafe {
        std::env::set_var("ROSTER_CONFIG", file.path());
    }

    let cfg = Config::load().unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:4002");
    assert_eq!(cfg.server.max_request_bytes, 4096);
    assert_eq!(cfg.store.db_path, PathBuf::from("test.db"));

    clear_env();
}

#[test]
fn test_env_overrides_yaml() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  listen_addr: \"127.0.0.1:4003\"\n").unwrap();
    unsafe {
        std::env::set_var("ROSTER_CONFIG", file.path());
        std::env::set_var("ROSTER_LISTEN", "127.0.0.1:4004");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:4004");

    clear_env();
}

#[test]
fn test_missing_config_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("ROSTER_CONFIG", "/nonexistent/roster.yml");
    }

    assert!(Config::load().is_err());

    clear_env();
}

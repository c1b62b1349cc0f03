use super::*;

#[test]
fn memory_history_push_appends_and_activates() {
    let mut history = MemoryHistory::new("/");
    history.push("/login");
    assert_eq!(history.current(), "/login");
    assert_eq!(history.entries(), ["/", "/login"]);
}

#[test]
fn memory_history_replace_overwrites_active_entry() {
    let mut history = MemoryHistory::new("/");
    history.push("/dashboard");
    history.replace("/login");
    assert_eq!(history.entries(), ["/", "/login"]);
}

#[test]
fn memory_history_back_and_forward_walk_the_stack() {
    let mut history = MemoryHistory::new("/");
    history.push("/a");
    history.push("/b");
    assert!(history.back());
    assert_eq!(history.current(), "/a");
    assert!(history.back());
    assert!(!history.back());
    assert_eq!(history.current(), "/");
    assert!(history.forward());
    assert!(history.forward());
    assert!(!history.forward());
    assert_eq!(history.current(), "/b");
}

#[test]
fn memory_history_push_after_back_drops_forward_entries() {
    let mut history = MemoryHistory::new("/");
    history.push("/a");
    history.push("/b");
    history.back();
    history.push("/c");
    assert_eq!(history.entries(), ["/", "/a", "/c"]);
    assert!(!history.forward());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_history_is_inert_outside_the_browser() {
    let mut history = BrowserHistory;
    history.push("/dashboard");
    history.replace("/login");
    assert_eq!(history.current(), "/");
}

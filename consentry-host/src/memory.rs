//! In-memory host environment for tests and headless embeddings.

use crate::page::{HostPage, ScriptTag};
use crate::store::{KeyValueStore, StoreError, StoreResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use consentry_types::{Node, ScriptRef};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone)]
struct ScriptState {
    src: String,
    content_type: String,
    markers: BTreeMap<String, String>,
}

/// An in-memory stand-in for the host document.
///
/// Cookie writes follow document-cookie semantics closely enough for the
/// adapter and applier: the first segment is `name=value`, and an
/// `expires` attribute in the past deletes the cookie.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    hostname: String,
    url: String,
    title: String,
    secure: bool,
    time_zone: String,
    locale: Option<String>,
    bootstrap_attrs: Option<BTreeMap<String, String>>,
    cookies: Vec<(String, String)>,
    scripts: Vec<ScriptState>,
    mounted: Vec<Node>,
    root_classes: HashMap<String, BTreeSet<String>>,
    checkbox_overrides: HashMap<String, bool>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// A secure page on `example.com` in a GDPR time zone.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hostname: "example.com".to_string(),
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            secure: true,
            time_zone: "Europe/Berlin".to_string(),
            locale: Some("en-US".to_string()),
            bootstrap_attrs: None,
            cookies: Vec::new(),
            scripts: Vec::new(),
            mounted: Vec::new(),
            root_classes: HashMap::new(),
            checkbox_overrides: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.to_string();
        self.url = format!("https://{hostname}/");
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, zone: &str) -> Self {
        self.time_zone = zone.to_string();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        self.locale = locale.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a `<script src>` element and returns its handle.
    pub fn add_script(&mut self, src: &str) -> ScriptRef {
        self.scripts.push(ScriptState {
            src: src.to_string(),
            content_type: "text/javascript".to_string(),
            markers: BTreeMap::new(),
        });
        ScriptRef(self.scripts.len() as u64 - 1)
    }

    #[must_use]
    pub fn with_script(mut self, src: &str) -> Self {
        self.add_script(src);
        self
    }

    #[must_use]
    pub fn with_bootstrap_attrs(mut self, attrs: &[(&str, &str)]) -> Self {
        self.bootstrap_attrs = Some(
            attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Simulates the user toggling a rendered checkbox.
    pub fn set_checkbox(&mut self, input_id: &str, checked: bool) {
        self.checkbox_overrides.insert(input_id.to_string(), checked);
    }

    /// The cookie jar as name/value pairs, for assertions.
    #[must_use]
    pub fn cookie_pairs(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// The mounted root nodes, for assertions.
    #[must_use]
    pub fn mounted_roots(&self) -> &[Node] {
        &self.mounted
    }

    /// Classes currently applied to a mounted root.
    #[must_use]
    pub fn root_classes(&self, root_id: &str) -> Vec<String> {
        self.root_classes
            .get(root_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn script(&self, id: ScriptRef) -> Option<&ScriptState> {
        usize::try_from(id.0).ok().and_then(|i| self.scripts.get(i))
    }

    fn script_mut(&mut self, id: ScriptRef) -> Option<&mut ScriptState> {
        usize::try_from(id.0)
            .ok()
            .and_then(|i| self.scripts.get_mut(i))
    }
}

/// Parses the `expires` attribute of a cookie assignment.
///
/// Accepts RFC 2822 dates with a `UTC` or `GMT` zone, plus RFC 3339.
fn parse_expires(value: &str) -> Option<DateTime<Utc>> {
    let normalized = value.trim().replace(" UTC", " GMT");
    if let Ok(parsed) = DateTime::parse_from_rfc2822(&normalized) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(normalized.trim_end_matches(" GMT"), "%a, %d %b %Y %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

impl HostPage for MemoryPage {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn page_url(&self) -> String {
        self.url.clone()
    }

    fn page_title(&self) -> String {
        self.title.clone()
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn time_zone(&self) -> String {
        self.time_zone.clone()
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn bootstrap_attrs(&self) -> Option<BTreeMap<String, String>> {
        self.bootstrap_attrs.clone()
    }

    fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_cookie(&mut self, assignment: &str) {
        let mut segments = assignment.split(';');
        let Some(pair) = segments.next() else { return };
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let name = name.trim().to_string();
        let value = value.trim().to_string();

        let expired = segments
            .filter_map(|segment| segment.trim().split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("expires"))
            .and_then(|(_, date)| parse_expires(date))
            .is_some_and(|at| at < Utc::now());

        self.cookies.retain(|(existing, _)| *existing != name);
        if !expired {
            self.cookies.push((name, value));
        }
    }

    fn script_tags(&self) -> Vec<ScriptTag> {
        self.scripts
            .iter()
            .enumerate()
            .map(|(i, s)| ScriptTag {
                id: ScriptRef(i as u64),
                src: s.src.clone(),
            })
            .collect()
    }

    fn script_type(&self, script: ScriptRef) -> Option<String> {
        self.script(script).map(|s| s.content_type.clone())
    }

    fn set_script_type(&mut self, script: ScriptRef, content_type: &str) {
        if let Some(state) = self.script_mut(script) {
            state.content_type = content_type.to_string();
        }
    }

    fn set_script_marker(&mut self, script: ScriptRef, marker: &str, value: &str) {
        if let Some(state) = self.script_mut(script) {
            state.markers.insert(marker.to_string(), value.to_string());
        }
    }

    fn remove_script_marker(&mut self, script: ScriptRef, marker: &str) {
        if let Some(state) = self.script_mut(script) {
            state.markers.remove(marker);
        }
    }

    fn has_script_marker(&self, script: ScriptRef, marker: &str) -> bool {
        self.script(script)
            .is_some_and(|s| s.markers.contains_key(marker))
    }

    fn is_mounted(&self, root_id: &str) -> bool {
        self.mounted
            .iter()
            .any(|node| node.get_attr("id") == Some(root_id))
    }

    fn mount(&mut self, node: Node) {
        self.mounted.push(node);
    }

    fn unmount(&mut self, root_id: &str) {
        self.mounted
            .retain(|node| node.get_attr("id") != Some(root_id));
        self.root_classes.remove(root_id);
    }

    fn set_root_class(&mut self, root_id: &str, class: &str, enabled: bool) {
        let classes = self.root_classes.entry(root_id.to_string()).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn checkbox_checked(&self, input_id: &str) -> Option<bool> {
        if let Some(state) = self.checkbox_overrides.get(input_id) {
            return Some(*state);
        }
        self.mounted
            .iter()
            .find_map(|node| node.find_by_id(input_id))
            .map(|node| node.get_attr("checked").is_some())
    }
}

/// An in-memory key-value store with switchable failure modes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every operation fail, simulating disabled storage.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Direct read for assertions, bypassing the failure switch.
    #[must_use]
    pub fn raw_get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Direct write for fixtures, bypassing the failure switch.
    pub fn raw_set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.unavailable {
            return Err(StoreError::Unavailable("storage disabled".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::WriteRejected("storage disabled".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("storage disabled".to_string()));
        }
        self.entries.remove(key);
        Ok(())
    }
}

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};

use rust_embed::RustEmbed;

pub const EYE_OPEN: &str = "eye-open";
pub const EYE_OFF: &str = "eye-off";
pub const ERROR: &str = "error";

/// Glyph names used by fields, mapped onto files of the embedded pack.
const FIELD_ALIASES: &[(&str, &str)] = &[(EYE_OPEN, "eye"), (ERROR, "alert-circle")];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconName {
    value: String,
}

impl IconName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Default)]
struct PackIndex {
    names: BTreeMap<String, PathBuf>,
}

impl PackIndex {
    fn insert(&mut self, name: String, path: PathBuf) {
        self.names.entry(name).or_insert(path);
    }

    fn alias(&mut self, alias: &str, target: &str) {
        if let Some(path) = self.names.get(target).cloned() {
            self.insert(alias.to_string(), path);
        }
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.names.get(name).cloned()
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

#[derive(Clone, Debug)]
pub struct IconRegistry {
    pack: Arc<PackIndex>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<IconRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut pack = extract_embedded_pack::<EmbeddedFieldIcons>("field")
            .and_then(|root| load_pack_from_root(&root).ok())
            .unwrap_or_default();
        for (alias, target) in FIELD_ALIASES {
            pack.alias(alias, target);
        }
        if pack.len() == 0 {
            tracing::warn!("embedded field icons could not be extracted");
        }
        Self {
            pack: Arc::new(pack),
        }
    }

    pub fn resolve_named(&self, name: &IconName) -> Option<PathBuf> {
        self.pack.resolve(name.as_str())
    }
}

fn load_pack_from_root(root: &Path) -> Result<PackIndex, std::io::Error> {
    let mut pack = PackIndex::default();
    let outline_root = root.join("outline");
    if !outline_root.exists() {
        return Ok(pack);
    }

    for entry in fs::read_dir(&outline_root)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .and_then(|value| value.to_str())
            .is_some_and(|value| value.eq_ignore_ascii_case("svg"));
        if !path.is_file() || !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|value| value.to_str()) {
            pack.insert(stem.to_string(), path.clone());
        }
    }
    Ok(pack)
}

fn extract_embedded_pack<T: RustEmbed>(folder_name: &str) -> Option<PathBuf> {
    let root = std::env::temp_dir()
        .join("calmfield-icons")
        .join(env!("CARGO_PKG_VERSION"))
        .join(folder_name);
    let marker = root.join(".extract-ready");

    if marker.exists() && embedded_pack_is_complete::<T>(&root) {
        return Some(root);
    }

    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).ok()?;

    for relative in T::iter() {
        let relative = relative.as_ref();
        let (Some(safe_relative), Some(content)) =
            (sanitize_relative_path(relative), T::get(relative))
        else {
            continue;
        };

        let destination = root.join(safe_relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        fs::write(destination, content.data.as_ref()).ok()?;
    }

    fs::write(marker, b"ok").ok()?;
    Some(root)
}

fn embedded_pack_is_complete<T: RustEmbed>(root: &Path) -> bool {
    T::iter().all(|relative| {
        sanitize_relative_path(relative.as_ref())
            .is_some_and(|safe_relative| root.join(safe_relative).is_file())
    })
}

fn sanitize_relative_path(input: &str) -> Option<PathBuf> {
    let mut output = PathBuf::new();
    for component in Path::new(input).components() {
        match component {
            Component::Normal(value) => output.push(value),
            _ => return None,
        }
    }
    Some(output)
}

#[derive(RustEmbed)]
#[folder = "assets/icons/field"]
struct EmbeddedFieldIcons;

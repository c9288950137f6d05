use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}

/// A few words of random text, never empty
pub fn random_content() -> String {
    use fake::Fake;
    use fake::faker::lorem::en::Words;

    Words(5..10).fake::<Vec<String>>().join(" ")
}

/// Write `files_count` files with random names and content directly under `dir`
///
/// Returns their paths relative to `dir`, sorted.
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<String> {
    use fake::Fake;
    use fake::faker::lorem::en::Word;

    let mut names = Vec::with_capacity(files_count);
    while names.len() < files_count {
        let name = format!("{}-{}.txt", Word().fake::<String>(), names.len());
        write_file(FileSpec::new(dir.join(&name), random_content()));
        names.push(name);
    }

    names.sort();
    names
}

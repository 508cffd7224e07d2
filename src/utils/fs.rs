use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::{BlogkitError, BoxResult};

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(BlogkitError::from)?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref()).map_err(|e| {
        BlogkitError::Generic(format!("Failed to open {}: {}", path.as_ref().display(), e))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(BlogkitError::from)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref()).map_err(BlogkitError::from)?;
    file.write_all(contents.as_bytes()).map_err(BlogkitError::from)?;
    Ok(())
}

/// Write rendered output to the given file, or to stdout when no file is given
pub fn write_output(output: Option<&Path>, contents: &str) -> BoxResult<()> {
    match output {
        Some(path) => write_file(path, contents),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes()).map_err(BlogkitError::from)?;
            if !contents.ends_with('\n') {
                handle.write_all(b"\n").map_err(BlogkitError::from)?;
            }
            Ok(())
        }
    }
}

/// Get the lowercased file extension
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        assert_eq!(get_extension("post.MD"), Some("md".to_string()));
        assert_eq!(get_extension("dir/page.html"), Some("html".to_string()));
        assert_eq!(get_extension("README"), None);
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = std::env::temp_dir().join(format!("blogkit-fs-{}", std::process::id()));
        let path = dir.join("nested").join("out.html");

        write_file(&path, "<ul></ul>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<ul></ul>");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_errors_are_io_errors() {
        let blocker = std::env::temp_dir().join(format!("blogkit-fs-blocker-{}", std::process::id()));
        write_file(&blocker, "not a directory").unwrap();

        let err = write_file(blocker.join("child.html"), "x").unwrap_err();
        let err = err.downcast_ref::<BlogkitError>().expect("blogkit error");
        assert!(matches!(err, BlogkitError::Io(_)));

        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/definitely/not/here.md").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}

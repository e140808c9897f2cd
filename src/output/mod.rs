//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::generation::{Artifact, OutputService};
    use tempfile::TempDir;

    #[test]
    fn test_filesystem_output_write_artifacts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let artifacts = vec![
            Artifact::new(
                temp_dir.path().join("Formula/tpaws.rb"),
                "class Tpaws < Formula\nend\n",
            ),
            Artifact::new(temp_dir.path().join("other.rb"), "class Other < Formula\nend\n"),
        ];

        output_service.write_artifacts(&artifacts).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("Formula/tpaws.rb"))
            .expect("Failed to read tpaws.rb");
        assert_eq!(content, "class Tpaws < Formula\nend\n");
        assert!(temp_dir.path().join("other.rb").exists());
    }

    #[test]
    fn test_filesystem_output_overwrites_existing_formula() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("tpaws.rb");

        output_service
            .write_artifacts(&[Artifact::new(&path, "version \"1.0.0\"")])
            .unwrap();
        output_service
            .write_artifacts(&[Artifact::new(&path, "version \"1.1.0\"")])
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "version \"1.1.0\"");
    }

    #[test]
    fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let nested_path = temp_dir.path().join("deeply/nested/directory");
        output_service.ensure_directory(&nested_path).unwrap();

        assert!(nested_path.is_dir());
    }

    #[test]
    fn test_filesystem_output_reports_path_on_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let output_service = FileSystemOutputService::new();

        let error = output_service
            .write_artifacts(&[Artifact::new(blocker.join("tpaws.rb"), "")])
            .unwrap_err();

        assert!(matches!(error, Error::Output(_)));
        assert!(error.to_string().contains("blocker"));
    }
}

//! Checks that `tests/unit` mirrors `src` and that every unit test is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module organization files have no logic to test
    fn is_organizational(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        collect_relative_paths(root, root)
            .unwrap_or_else(|e| unreachable!("failed to scan {}: {e}", root.display()))
    }

    // Tests every source module has a unit test file at the same relative path
    #[test]
    fn test_src_modules_have_unit_tests() {
        let src_paths = mirrored_paths(SRC_DIR);
        let unit_paths = mirrored_paths(UNIT_DIR);

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the module it covered
    #[test]
    fn test_unit_tests_have_src_counterparts() {
        let src_paths = mirrored_paths(SRC_DIR);
        let unit_paths = mirrored_paths(UNIT_DIR);

        let orphaned: Vec<_> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source modules:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every unit test file is reachable from the harness through mod declarations
    #[test]
    fn test_unit_tests_are_declared() {
        let unit_paths = mirrored_paths(UNIT_DIR);
        let mut undeclared = Vec::new();

        for path in unit_paths.iter().filter(|path| path.ends_with(".rs")) {
            let relative = Path::new(path);
            let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == "main" || stem == "mod" {
                continue;
            }

            let parent = relative.parent().unwrap_or_else(|| Path::new(""));
            let declaring = if parent.as_os_str().is_empty() {
                Path::new(UNIT_DIR).join("main.rs")
            } else {
                Path::new(UNIT_DIR).join(parent).join("mod.rs")
            };
            let content = fs::read_to_string(&declaring).unwrap_or_default();

            if !declares_module(&content, stem) {
                undeclared.push(format!("  - {UNIT_DIR}/{path} (expected in {})", declaring.display()));
            }
        }

        for dir in unit_paths.iter().filter(|path| !path.ends_with(".rs")) {
            let Some(name) = Path::new(dir).file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let parent = Path::new(dir).parent().unwrap_or_else(|| Path::new(""));
            let declaring = if parent.as_os_str().is_empty() {
                Path::new(UNIT_DIR).join("main.rs")
            } else {
                Path::new(UNIT_DIR).join(parent).join("mod.rs")
            };
            let content = fs::read_to_string(&declaring).unwrap_or_default();

            if !declares_module(&content, name) {
                undeclared.push(format!("  - {UNIT_DIR}/{dir}/ (expected in {})", declaring.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test modules never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every test file outside the harness roots contains at least one test
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        check_test_files(tests_dir, &mut files_without_tests)
            .unwrap_or_else(|e| unreachable!("failed to scan tests: {e}"));

        assert!(
            files_without_tests.is_empty(),
            "Test files without any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn declares_module(content: &str, name: &str) -> bool {
        content.lines().map(str::trim).any(|line| {
            line == format!("mod {name};") || line == format!("pub mod {name};")
        })
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|e| io::Error::other(e.to_string()))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let file_name = path.file_name().and_then(|name| name.to_str());
            if matches!(file_name, Some("main.rs" | "mod.rs")) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}

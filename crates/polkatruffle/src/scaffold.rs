use std::{fs, io, path::Path};

/// Files written into a freshly scaffolded project.
///
/// Paths are relative to the new project root. Contents are embedded at
/// compile time, so the installed binary does not depend on a template
/// directory location.
const TEMPLATE_FILES: &[(&str, &str)] = &[
    ("package.json", include_str!("../templates/package.json")),
    (
        "truffle-config.js",
        include_str!("../templates/truffle-config.js"),
    ),
    (
        "Polkatruffle.toml",
        include_str!("../templates/Polkatruffle.toml"),
    ),
    (".gitignore", include_str!("../templates/gitignore")),
    (
        "contracts/Example.sol",
        include_str!("../templates/contracts/Example.sol"),
    ),
    (
        "migrations/1_deploy_example.js",
        include_str!("../templates/migrations/1_deploy_example.js"),
    ),
    (
        "test/Example.test.js",
        include_str!("../templates/test/Example.test.js"),
    ),
];

/// Unpack the embedded project template into `dest`, creating directories as needed.
pub(crate) fn unpack_template(dest: &Path) -> io::Result<()> {
    for (relative_path, contents) in TEMPLATE_FILES {
        let path = dest.join(relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::ProjectConfig;

    use super::{unpack_template, TEMPLATE_FILES};

    #[test]
    fn unpacks_every_template_file() {
        let dir = tempfile::tempdir().expect("unable to create temporary directory");

        unpack_template(dir.path()).expect("unable to unpack template");

        for (relative_path, _) in TEMPLATE_FILES {
            assert!(
                dir.path().join(relative_path).is_file(),
                "missing {relative_path}"
            );
        }
    }

    #[test]
    fn template_configuration_is_loadable() {
        let dir = tempfile::tempdir().expect("unable to create temporary directory");

        unpack_template(dir.path()).expect("unable to unpack template");

        let config = ProjectConfig::new(Some(dir.path().join("Polkatruffle.toml")))
            .expect("unable to parse template configuration");

        let network = config
            .networks
            .get("passetHubTestnet")
            .expect("missing passetHubTestnet network");
        assert_eq!(network.chain_id, 420420421);

        let compiler = config.compiler.expect("missing compiler section");
        assert_eq!(compiler.version, "0.8.28");
        assert!(compiler.optimizer.enabled);
        assert_eq!(compiler.optimizer.runs, Some(200));
    }
}

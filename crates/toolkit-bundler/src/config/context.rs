use std::path::{Path, PathBuf};

use toolkit_config::{BuildFiles, LoadedConfig, Mode, PackageConfig, ProjectConfig};

/// Browser targets used when a build declares none
pub const DEFAULT_TARGETS: &[&str] = &[
    "> 1%",
    "Firefox ESR",
    "last 2 versions",
    "not ie <= 11",
    "not ie_mob <=11",
];

/// Which set of build files an entry binding draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Script,
    Module,
}

/// Shared input of every configuration sub-builder.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub root: PathBuf,
    pub project: ProjectConfig,
    pub package: PackageConfig,
    pub build_files: BuildFiles,
    pub module_build_files: BuildFiles,
    pub mode: Mode,
    pub is_package: bool,
    /// Set when computing slices of the script-module build
    pub is_module: bool,
    pub default_targets: Vec<String>,
}

impl BuildContext {
    pub fn new(
        root: impl Into<PathBuf>,
        project: ProjectConfig,
        package: PackageConfig,
        build_files: BuildFiles,
        module_build_files: BuildFiles,
        mode: Mode,
    ) -> Self {
        let is_package = package.is_package();
        Self {
            root: root.into(),
            project,
            package,
            build_files,
            module_build_files,
            mode,
            is_package,
            is_module: false,
            default_targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn from_loaded(loaded: LoadedConfig, mode: Mode) -> Self {
        Self::new(
            loaded.root,
            loaded.project,
            loaded.package,
            loaded.build_files,
            loaded.module_build_files,
            mode,
        )
    }

    /// The same context flagged for the module build.
    pub fn as_module(&self) -> Self {
        Self {
            is_module: true,
            ..self.clone()
        }
    }

    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    pub fn build_files(&self, build_type: BuildType) -> &BuildFiles {
        match build_type {
            BuildType::Script => &self.build_files,
            BuildType::Module => &self.module_build_files,
        }
    }

    /// Resolve a project-relative path.
    pub fn project_path(&self, relative: &Path) -> PathBuf {
        path_clean::clean(self.root.join(relative))
    }

    pub fn blocks_dir(&self) -> PathBuf {
        self.project_path(&self.project.paths.blocks_dir)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.project_path(&self.project.paths.dist_dir)
    }
}

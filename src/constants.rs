//! Constants used throughout toolbox-baker

/// Package manifest read from the project root
pub const MANIFEST_FILENAME: &str = "package.json";

/// Directory holding the generated skeleton, relative to the project root
pub const TEMPLATE_DIR: &str = ".template";

/// Auto-generated source stub, relative to both the template dir and the project root
pub const AUTO_GENERATED_STUB: &str = "src/auto-generated.ts";

/// Boilerplate files copied verbatim from the template dir into the project root
pub const BOILERPLATE_FILES: &[&str] = &[
    "README.md",
    ".gitignore",
    ".npmignore",
    ".prettierignore",
    "LICENSE",
    "package.json",
    "tsconfig.json",
    "webpack.config.ts",
];

/// Libraries the bundle expects the host environment to provide
pub const RUNTIME_EXTERNALS: &[(&str, &str)] = &[
    ("@youwol/vsf-core", "^0.2.3"),
    ("rxjs", "^6.5.5"),
    ("three", "^0.152.0"),
];

/// Build-time only dependencies
pub const DEV_ONLY_DEPENDENCIES: &[(&str, &str)] = &[
    // three.js type definitions
    ("@types/three", "^0.152.0"),
];

/// Main bundle entry file, relative to `src/`
pub const MAIN_ENTRY_FILE: &str = "./lib/toolbox.ts";

/// Externals the main entry point loads, in load order
pub const MAIN_LOAD_DEPENDENCIES: &[&str] = &["@youwol/vsf-core", "rxjs", "three"];

/// Whether the generator also scaffolds a user guide
pub const GENERATE_USER_GUIDE: bool = false;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

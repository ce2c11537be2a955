//! native::libgit2
//!
//! Constant source backed by the linked libgit2.
//!
//! Values come from the constants `libgit2-sys` was generated against, so
//! they are the values the linked library was compiled with. The release
//! number and feature set come from the runtime through `git2::Version`.
//!
//! A few symbols are missing from `libgit2-sys`, such as the checkout flags
//! `DONT_REMOVE_EXISTING`, `DONT_WRITE_INDEX` and `DRY_RUN`. Those fall back
//! to the header value, provided the runtime release defines them.

use git2::Version;
use libgit2_sys as raw;

use super::ConstantSource;
use crate::catalog::header;
use crate::core::types::LibVersion;

/// The libgit2 linked into this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Libgit2 {
    version: LibVersion,
    features: u32,
}

impl Libgit2 {
    /// Query the runtime library for its release and features.
    pub fn detect() -> Self {
        let runtime = Version::get();
        let (major, minor, patch) = runtime.libgit2_version();

        let mut features = 0;
        if runtime.threads() {
            features |= raw::GIT_FEATURE_THREADS as u32;
        }
        if runtime.https() {
            features |= raw::GIT_FEATURE_HTTPS as u32;
        }
        if runtime.ssh() {
            features |= raw::GIT_FEATURE_SSH as u32;
        }
        if runtime.nsec() {
            features |= raw::GIT_FEATURE_NSEC as u32;
        }

        let version = LibVersion::new(major, minor, patch);
        log::debug!("linked libgit2 {version}, features 0x{features:x}");

        Self { version, features }
    }
}

impl Default for Libgit2 {
    fn default() -> Self {
        Self::detect()
    }
}

impl ConstantSource for Libgit2 {
    fn version(&self) -> LibVersion {
        self.version
    }

    fn resolve(&self, symbol: &str) -> Option<i64> {
        exported(symbol).or_else(|| {
            header(symbol)
                .filter(|h| h.available_in(self.version))
                .map(|h| h.value)
        })
    }

    fn features(&self) -> u32 {
        self.features
    }
}

macro_rules! sys_constants {
    ($symbol:expr; $($name:ident),* $(,)?) => {
        match $symbol {
            $(stringify!($name) => Some(raw::$name as i64),)*
            _ => None,
        }
    };
}

/// Constants `libgit2-sys` re-exports, by name.
fn exported(symbol: &str) -> Option<i64> {
    sys_constants!(symbol;
        GIT_APPLY_LOCATION_WORKDIR,
        GIT_APPLY_LOCATION_INDEX,
        GIT_APPLY_LOCATION_BOTH,
        GIT_ATTR_CHECK_FILE_THEN_INDEX,
        GIT_ATTR_CHECK_INDEX_THEN_FILE,
        GIT_ATTR_CHECK_INDEX_ONLY,
        GIT_ATTR_CHECK_NO_SYSTEM,
        GIT_ATTR_CHECK_INCLUDE_HEAD,
        GIT_BLAME_NORMAL,
        GIT_BLAME_TRACK_COPIES_SAME_FILE,
        GIT_BLAME_TRACK_COPIES_SAME_COMMIT_MOVES,
        GIT_BLAME_TRACK_COPIES_SAME_COMMIT_COPIES,
        GIT_BLAME_TRACK_COPIES_ANY_COMMIT_COPIES,
        GIT_BLAME_FIRST_PARENT,
        GIT_BLAME_USE_MAILMAP,
        GIT_BLAME_IGNORE_WHITESPACE,
        GIT_BRANCH_LOCAL,
        GIT_BRANCH_REMOTE,
        GIT_BRANCH_ALL,
        GIT_CHECKOUT_NOTIFY_NONE,
        GIT_CHECKOUT_NOTIFY_CONFLICT,
        GIT_CHECKOUT_NOTIFY_DIRTY,
        GIT_CHECKOUT_NOTIFY_UPDATED,
        GIT_CHECKOUT_NOTIFY_UNTRACKED,
        GIT_CHECKOUT_NOTIFY_ALL,
        GIT_CHECKOUT_NONE,
        GIT_CHECKOUT_SAFE,
        GIT_CHECKOUT_FORCE,
        GIT_CHECKOUT_RECREATE_MISSING,
        GIT_CHECKOUT_ALLOW_CONFLICTS,
        GIT_CHECKOUT_REMOVE_UNTRACKED,
        GIT_CHECKOUT_REMOVE_IGNORED,
        GIT_CHECKOUT_UPDATE_ONLY,
        GIT_CHECKOUT_DONT_UPDATE_INDEX,
        GIT_CHECKOUT_NO_REFRESH,
        GIT_CHECKOUT_SKIP_UNMERGED,
        GIT_CHECKOUT_USE_OURS,
        GIT_CHECKOUT_USE_THEIRS,
        GIT_CHECKOUT_DISABLE_PATHSPEC_MATCH,
        GIT_CHECKOUT_SKIP_LOCKED_DIRECTORIES,
        GIT_CHECKOUT_DONT_OVERWRITE_IGNORED,
        GIT_CHECKOUT_CONFLICT_STYLE_MERGE,
        GIT_CHECKOUT_CONFLICT_STYLE_DIFF3,
        GIT_DIFF_FIND_BY_CONFIG,
        GIT_DIFF_FIND_RENAMES,
        GIT_DIFF_FIND_RENAMES_FROM_REWRITES,
        GIT_DIFF_FIND_COPIES,
        GIT_DIFF_FIND_COPIES_FROM_UNMODIFIED,
        GIT_DIFF_FIND_REWRITES,
        GIT_DIFF_BREAK_REWRITES,
        GIT_DIFF_FIND_AND_BREAK_REWRITES,
        GIT_DIFF_FIND_FOR_UNTRACKED,
        GIT_DIFF_FIND_ALL,
        GIT_DIFF_FIND_IGNORE_LEADING_WHITESPACE,
        GIT_DIFF_FIND_IGNORE_WHITESPACE,
        GIT_DIFF_FIND_DONT_IGNORE_WHITESPACE,
        GIT_DIFF_FIND_EXACT_MATCH_ONLY,
        GIT_DIFF_BREAK_REWRITES_FOR_RENAMES_ONLY,
        GIT_DIFF_FIND_REMOVE_UNMODIFIED,
        GIT_DIFF_NORMAL,
        GIT_DIFF_REVERSE,
        GIT_DIFF_INCLUDE_IGNORED,
        GIT_DIFF_RECURSE_IGNORED_DIRS,
        GIT_DIFF_INCLUDE_UNTRACKED,
        GIT_DIFF_RECURSE_UNTRACKED_DIRS,
        GIT_DIFF_INCLUDE_UNMODIFIED,
        GIT_DIFF_INCLUDE_TYPECHANGE,
        GIT_DIFF_INCLUDE_TYPECHANGE_TREES,
        GIT_DIFF_IGNORE_FILEMODE,
        GIT_DIFF_IGNORE_SUBMODULES,
        GIT_DIFF_IGNORE_CASE,
        GIT_DIFF_DISABLE_PATHSPEC_MATCH,
        GIT_DIFF_SKIP_BINARY_CHECK,
        GIT_DIFF_ENABLE_FAST_UNTRACKED_DIRS,
        GIT_DIFF_UPDATE_INDEX,
        GIT_DIFF_INCLUDE_UNREADABLE,
        GIT_DIFF_INCLUDE_UNREADABLE_AS_UNTRACKED,
        GIT_DIFF_INDENT_HEURISTIC,
        GIT_DIFF_IGNORE_BLANK_LINES,
        GIT_DIFF_FORCE_TEXT,
        GIT_DIFF_FORCE_BINARY,
        GIT_DIFF_IGNORE_WHITESPACE,
        GIT_DIFF_IGNORE_WHITESPACE_CHANGE,
        GIT_DIFF_IGNORE_WHITESPACE_EOL,
        GIT_DIFF_SHOW_UNTRACKED_CONTENT,
        GIT_DIFF_SHOW_UNMODIFIED,
        GIT_DIFF_PATIENCE,
        GIT_DIFF_MINIMAL,
        GIT_DIFF_SHOW_BINARY,
        GIT_FEATURE_THREADS,
        GIT_FEATURE_HTTPS,
        GIT_FEATURE_SSH,
        GIT_FEATURE_NSEC,
        GIT_FILEMODE_UNREADABLE,
        GIT_FILEMODE_TREE,
        GIT_FILEMODE_BLOB,
        GIT_FILEMODE_BLOB_EXECUTABLE,
        GIT_FILEMODE_LINK,
        GIT_FILEMODE_COMMIT,
        GIT_MERGE_ANALYSIS_NONE,
        GIT_MERGE_ANALYSIS_NORMAL,
        GIT_MERGE_ANALYSIS_UP_TO_DATE,
        GIT_MERGE_ANALYSIS_FASTFORWARD,
        GIT_MERGE_ANALYSIS_UNBORN,
        GIT_MERGE_PREFERENCE_NONE,
        GIT_MERGE_PREFERENCE_NO_FASTFORWARD,
        GIT_MERGE_PREFERENCE_FASTFORWARD_ONLY,
        GIT_OPT_GET_MWINDOW_SIZE,
        GIT_OPT_SET_MWINDOW_SIZE,
        GIT_OPT_GET_MWINDOW_MAPPED_LIMIT,
        GIT_OPT_SET_MWINDOW_MAPPED_LIMIT,
        GIT_OPT_GET_SEARCH_PATH,
        GIT_OPT_SET_SEARCH_PATH,
        GIT_OPT_SET_CACHE_OBJECT_LIMIT,
        GIT_OPT_SET_CACHE_MAX_SIZE,
        GIT_OPT_ENABLE_CACHING,
        GIT_OPT_GET_CACHED_MEMORY,
        GIT_OPT_GET_TEMPLATE_PATH,
        GIT_OPT_SET_TEMPLATE_PATH,
        GIT_OPT_SET_SSL_CERT_LOCATIONS,
        GIT_OPT_SET_USER_AGENT,
        GIT_OPT_ENABLE_STRICT_OBJECT_CREATION,
        GIT_OPT_ENABLE_STRICT_SYMBOLIC_REF_CREATION,
        GIT_OPT_SET_SSL_CIPHERS,
        GIT_OPT_GET_USER_AGENT,
        GIT_OPT_ENABLE_OFS_DELTA,
        GIT_OPT_ENABLE_FSYNC_GITDIR,
        GIT_OPT_GET_WINDOWS_SHAREMODE,
        GIT_OPT_SET_WINDOWS_SHAREMODE,
        GIT_OPT_ENABLE_STRICT_HASH_VERIFICATION,
        GIT_OPT_SET_ALLOCATOR,
        GIT_OPT_ENABLE_UNSAVED_INDEX_SAFETY,
        GIT_OPT_GET_PACK_MAX_OBJECTS,
        GIT_OPT_SET_PACK_MAX_OBJECTS,
        GIT_OPT_DISABLE_PACK_KEEP_FILE_CHECKS,
        GIT_OPT_GET_OWNER_VALIDATION,
        GIT_OPT_SET_OWNER_VALIDATION,
        GIT_REFERENCE_INVALID,
        GIT_REFERENCE_DIRECT,
        GIT_REFERENCE_SYMBOLIC,
        GIT_REFERENCE_ALL,
        GIT_REPOSITORY_INIT_BARE,
        GIT_REPOSITORY_INIT_NO_REINIT,
        GIT_REPOSITORY_INIT_NO_DOTGIT_DIR,
        GIT_REPOSITORY_INIT_MKDIR,
        GIT_REPOSITORY_INIT_MKPATH,
        GIT_REPOSITORY_INIT_EXTERNAL_TEMPLATE,
        GIT_REPOSITORY_INIT_RELATIVE_GITLINK,
        GIT_REPOSITORY_INIT_SHARED_UMASK,
        GIT_REPOSITORY_INIT_SHARED_GROUP,
        GIT_REPOSITORY_INIT_SHARED_ALL,
        GIT_REPOSITORY_OPEN_NO_SEARCH,
        GIT_REPOSITORY_OPEN_CROSS_FS,
        GIT_REPOSITORY_OPEN_BARE,
        GIT_REPOSITORY_OPEN_NO_DOTGIT,
        GIT_REPOSITORY_OPEN_FROM_ENV,
        GIT_REPOSITORY_STATE_NONE,
        GIT_REPOSITORY_STATE_MERGE,
        GIT_REPOSITORY_STATE_REVERT,
        GIT_REPOSITORY_STATE_REVERT_SEQUENCE,
        GIT_REPOSITORY_STATE_CHERRYPICK,
        GIT_REPOSITORY_STATE_CHERRYPICK_SEQUENCE,
        GIT_REPOSITORY_STATE_BISECT,
        GIT_REPOSITORY_STATE_REBASE,
        GIT_REPOSITORY_STATE_REBASE_INTERACTIVE,
        GIT_REPOSITORY_STATE_REBASE_MERGE,
        GIT_REPOSITORY_STATE_APPLY_MAILBOX,
        GIT_REPOSITORY_STATE_APPLY_MAILBOX_OR_REBASE,
        GIT_RESET_SOFT,
        GIT_RESET_MIXED,
        GIT_RESET_HARD,
        GIT_SORT_NONE,
        GIT_SORT_TOPOLOGICAL,
        GIT_SORT_TIME,
        GIT_SORT_REVERSE,
        GIT_STASH_APPLY_PROGRESS_NONE,
        GIT_STASH_APPLY_PROGRESS_LOADING_STASH,
        GIT_STASH_APPLY_PROGRESS_ANALYZE_INDEX,
        GIT_STASH_APPLY_PROGRESS_ANALYZE_MODIFIED,
        GIT_STASH_APPLY_PROGRESS_ANALYZE_UNTRACKED,
        GIT_STASH_APPLY_PROGRESS_CHECKOUT_UNTRACKED,
        GIT_STASH_APPLY_PROGRESS_CHECKOUT_MODIFIED,
        GIT_STASH_APPLY_PROGRESS_DONE,
        GIT_SUBMODULE_IGNORE_UNSPECIFIED,
        GIT_SUBMODULE_IGNORE_NONE,
        GIT_SUBMODULE_IGNORE_UNTRACKED,
        GIT_SUBMODULE_IGNORE_DIRTY,
        GIT_SUBMODULE_IGNORE_ALL,
        GIT_SUBMODULE_STATUS_IN_HEAD,
        GIT_SUBMODULE_STATUS_IN_INDEX,
        GIT_SUBMODULE_STATUS_IN_CONFIG,
        GIT_SUBMODULE_STATUS_IN_WD,
        GIT_SUBMODULE_STATUS_INDEX_ADDED,
        GIT_SUBMODULE_STATUS_INDEX_DELETED,
        GIT_SUBMODULE_STATUS_INDEX_MODIFIED,
        GIT_SUBMODULE_STATUS_WD_UNINITIALIZED,
        GIT_SUBMODULE_STATUS_WD_ADDED,
        GIT_SUBMODULE_STATUS_WD_DELETED,
        GIT_SUBMODULE_STATUS_WD_MODIFIED,
        GIT_SUBMODULE_STATUS_WD_INDEX_MODIFIED,
        GIT_SUBMODULE_STATUS_WD_WD_MODIFIED,
        GIT_SUBMODULE_STATUS_WD_UNTRACKED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_a_release() {
        let lib = Libgit2::detect();
        assert!(lib.version().major >= 1);
    }

    #[test]
    fn resolves_stable_constants() {
        let lib = Libgit2::detect();
        assert_eq!(lib.resolve("GIT_RESET_SOFT"), Some(1));
        assert_eq!(lib.resolve("GIT_RESET_MIXED"), Some(2));
        assert_eq!(lib.resolve("GIT_RESET_HARD"), Some(3));
        assert_eq!(lib.resolve("GIT_SUBMODULE_IGNORE_UNSPECIFIED"), Some(-1));
        assert_eq!(lib.resolve("GIT_FILEMODE_BLOB"), Some(0o100644));
    }

    #[test]
    fn falls_back_to_headers() {
        let lib = Libgit2::detect();
        assert_eq!(exported("GIT_CHECKOUT_DONT_REMOVE_EXISTING"), None);
        assert_eq!(lib.resolve("GIT_CHECKOUT_DONT_REMOVE_EXISTING"), Some(1 << 22));
        assert_eq!(lib.resolve("GIT_CHECKOUT_DONT_WRITE_INDEX"), Some(1 << 23));
        assert_eq!(lib.resolve("GIT_DIFF_INCLUDE_CASECHANGE"), Some(1 << 11));
        assert_eq!(lib.resolve("GIT_NO_SUCH_CONSTANT"), None);
    }

    #[test]
    fn dry_run_follows_runtime_release() {
        let lib = Libgit2::detect();
        let expected = (lib.version() >= LibVersion::new(1, 7, 0)).then_some(1 << 24);
        assert_eq!(exported("GIT_CHECKOUT_DRY_RUN"), None);
        assert_eq!(lib.resolve("GIT_CHECKOUT_DRY_RUN"), expected);
    }

    #[test]
    fn exported_symbols_come_from_the_library() {
        assert_eq!(exported("GIT_DIFF_FIND_AND_BREAK_REWRITES"), Some(48));
        assert_eq!(exported("GIT_ATTR_CHECK_INCLUDE_HEAD"), Some(1 << 3));
        assert_eq!(exported("GIT_CHECKOUT_NOTIFY_NONE"), Some(0));
        assert_eq!(exported("GIT_CHECKOUT_NOTIFY_ALL"), Some(0xFFFF));
        assert_eq!(exported("GIT_OPT_SET_MWINDOW_SIZE"), Some(1));
        assert_eq!(exported("GIT_OPT_ENABLE_UNSAVED_INDEX_SAFETY"), Some(24));
    }

    #[test]
    fn exported_values_match_headers() {
        for h in crate::catalog::HEADERS {
            if let Some(value) = exported(h.symbol) {
                assert!(value == h.value || h.renumbered.is_some(), "{}", h.symbol);
            }
        }
    }

    #[test]
    fn features_use_feature_bits() {
        let lib = Libgit2::detect();
        assert_eq!(lib.features() & !0xF, 0);
    }
}

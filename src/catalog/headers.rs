//! catalog::headers
//!
//! Reference values of every native symbol the catalogue names, as
//! published in the libgit2 headers at [`BUNDLED_VERSION`].
//!
//! These are not the values the registry uses; the registry takes whatever
//! the linked library was compiled with. The table serves two purposes:
//!
//! - Detecting skew: a linked value that differs from the header value is
//!   reported when the registry loads.
//! - Version gating: symbols added after the baseline carry the release
//!   that introduced them, so a source can decide whether an older library
//!   has them at all. Symbols a later release renumbered carry that release
//!   and their new value, so each release is compared with its own headers.

use crate::core::types::LibVersion;

/// The libgit2 release the base header values are taken from.
pub const BUNDLED_VERSION: LibVersion = LibVersion::new(1, 7, 2);

/// One native symbol and its header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConstant {
    pub symbol: &'static str,
    pub value: i64,
    /// First libgit2 release defining the symbol. `None` for baseline
    /// symbols, which every supported release has.
    pub since: Option<LibVersion>,
    /// Release that renumbered the symbol, and its value from then on.
    pub renumbered: Option<(LibVersion, i64)>,
}

impl HeaderConstant {
    const fn base(symbol: &'static str, value: i64) -> Self {
        Self {
            symbol,
            value,
            since: None,
            renumbered: None,
        }
    }

    const fn since(symbol: &'static str, value: i64, major: u32, minor: u32) -> Self {
        Self {
            symbol,
            value,
            since: Some(LibVersion::new(major, minor, 0)),
            renumbered: None,
        }
    }

    const fn renumbered(
        symbol: &'static str,
        value: i64,
        major: u32,
        minor: u32,
        new_value: i64,
    ) -> Self {
        Self {
            symbol,
            value,
            since: None,
            renumbered: Some((LibVersion::new(major, minor, 0), new_value)),
        }
    }

    /// The value the headers of `version` define.
    pub fn value_in(&self, version: LibVersion) -> i64 {
        match self.renumbered {
            Some((at, value)) if at <= version => value,
            _ => self.value,
        }
    }

    /// True if a library at `version` defines this symbol.
    pub fn available_in(&self, version: LibVersion) -> bool {
        self.since.map_or(true, |since| since <= version)
    }

    /// True if every supported release defines this symbol.
    pub fn is_baseline(&self) -> bool {
        self.since.is_none()
    }
}

/// Look up the header entry for a symbol.
pub fn header(symbol: &str) -> Option<&'static HeaderConstant> {
    HEADERS.iter().find(|h| h.symbol == symbol)
}

use HeaderConstant as H;

/// Every header constant, grouped by family.
pub static HEADERS: &[HeaderConstant] = &[
    // apply.h
    H::base("GIT_APPLY_LOCATION_WORKDIR", 0),
    H::base("GIT_APPLY_LOCATION_INDEX", 1),
    H::base("GIT_APPLY_LOCATION_BOTH", 2),
    // attr.h
    H::base("GIT_ATTR_CHECK_FILE_THEN_INDEX", 0),
    H::base("GIT_ATTR_CHECK_INDEX_THEN_FILE", 1),
    H::base("GIT_ATTR_CHECK_INDEX_ONLY", 2),
    H::base("GIT_ATTR_CHECK_NO_SYSTEM", 1 << 2),
    H::base("GIT_ATTR_CHECK_INCLUDE_HEAD", 1 << 3),
    H::since("GIT_ATTR_CHECK_INCLUDE_COMMIT", 1 << 4, 1, 2),
    // blame.h
    H::base("GIT_BLAME_NORMAL", 0),
    H::base("GIT_BLAME_TRACK_COPIES_SAME_FILE", 1 << 0),
    H::base("GIT_BLAME_TRACK_COPIES_SAME_COMMIT_MOVES", 1 << 1),
    H::base("GIT_BLAME_TRACK_COPIES_SAME_COMMIT_COPIES", 1 << 2),
    H::base("GIT_BLAME_TRACK_COPIES_ANY_COMMIT_COPIES", 1 << 3),
    H::base("GIT_BLAME_FIRST_PARENT", 1 << 4),
    H::base("GIT_BLAME_USE_MAILMAP", 1 << 5),
    H::base("GIT_BLAME_IGNORE_WHITESPACE", 1 << 6),
    // branch.h
    H::base("GIT_BRANCH_LOCAL", 1),
    H::base("GIT_BRANCH_REMOTE", 2),
    H::base("GIT_BRANCH_ALL", 3),
    // checkout.h: notifications
    H::base("GIT_CHECKOUT_NOTIFY_NONE", 0),
    H::base("GIT_CHECKOUT_NOTIFY_CONFLICT", 1 << 0),
    H::base("GIT_CHECKOUT_NOTIFY_DIRTY", 1 << 1),
    H::base("GIT_CHECKOUT_NOTIFY_UPDATED", 1 << 2),
    H::base("GIT_CHECKOUT_NOTIFY_UNTRACKED", 1 << 3),
    H::base("GIT_CHECKOUT_NOTIFY_ALL", 0x0FFFF),
    // checkout.h: strategy
    H::renumbered("GIT_CHECKOUT_NONE", 0, 1, 8, 1 << 30),
    H::renumbered("GIT_CHECKOUT_SAFE", 1 << 0, 1, 8, 0),
    H::base("GIT_CHECKOUT_FORCE", 1 << 1),
    H::base("GIT_CHECKOUT_RECREATE_MISSING", 1 << 2),
    H::base("GIT_CHECKOUT_ALLOW_CONFLICTS", 1 << 4),
    H::base("GIT_CHECKOUT_REMOVE_UNTRACKED", 1 << 5),
    H::base("GIT_CHECKOUT_REMOVE_IGNORED", 1 << 6),
    H::base("GIT_CHECKOUT_UPDATE_ONLY", 1 << 7),
    H::base("GIT_CHECKOUT_DONT_UPDATE_INDEX", 1 << 8),
    H::base("GIT_CHECKOUT_NO_REFRESH", 1 << 9),
    H::base("GIT_CHECKOUT_SKIP_UNMERGED", 1 << 10),
    H::base("GIT_CHECKOUT_USE_OURS", 1 << 11),
    H::base("GIT_CHECKOUT_USE_THEIRS", 1 << 12),
    H::base("GIT_CHECKOUT_DISABLE_PATHSPEC_MATCH", 1 << 13),
    H::base("GIT_CHECKOUT_SKIP_LOCKED_DIRECTORIES", 1 << 18),
    H::base("GIT_CHECKOUT_DONT_OVERWRITE_IGNORED", 1 << 19),
    H::base("GIT_CHECKOUT_CONFLICT_STYLE_MERGE", 1 << 20),
    H::base("GIT_CHECKOUT_CONFLICT_STYLE_DIFF3", 1 << 21),
    H::base("GIT_CHECKOUT_DONT_REMOVE_EXISTING", 1 << 22),
    H::base("GIT_CHECKOUT_DONT_WRITE_INDEX", 1 << 23),
    H::since("GIT_CHECKOUT_DRY_RUN", 1 << 24, 1, 7),
    // diff.h: find
    H::base("GIT_DIFF_FIND_BY_CONFIG", 0),
    H::base("GIT_DIFF_FIND_RENAMES", 1 << 0),
    H::base("GIT_DIFF_FIND_RENAMES_FROM_REWRITES", 1 << 1),
    H::base("GIT_DIFF_FIND_COPIES", 1 << 2),
    H::base("GIT_DIFF_FIND_COPIES_FROM_UNMODIFIED", 1 << 3),
    H::base("GIT_DIFF_FIND_REWRITES", 1 << 4),
    H::base("GIT_DIFF_BREAK_REWRITES", 1 << 5),
    H::base("GIT_DIFF_FIND_AND_BREAK_REWRITES", (1 << 4) | (1 << 5)),
    H::base("GIT_DIFF_FIND_FOR_UNTRACKED", 1 << 6),
    H::base("GIT_DIFF_FIND_ALL", 0x0ff),
    H::base("GIT_DIFF_FIND_IGNORE_LEADING_WHITESPACE", 0),
    H::base("GIT_DIFF_FIND_IGNORE_WHITESPACE", 1 << 12),
    H::base("GIT_DIFF_FIND_DONT_IGNORE_WHITESPACE", 1 << 13),
    H::base("GIT_DIFF_FIND_EXACT_MATCH_ONLY", 1 << 14),
    H::base("GIT_DIFF_BREAK_REWRITES_FOR_RENAMES_ONLY", 1 << 15),
    H::base("GIT_DIFF_FIND_REMOVE_UNMODIFIED", 1 << 16),
    // diff.h: options
    H::base("GIT_DIFF_NORMAL", 0),
    H::base("GIT_DIFF_REVERSE", 1 << 0),
    H::base("GIT_DIFF_INCLUDE_IGNORED", 1 << 1),
    H::base("GIT_DIFF_RECURSE_IGNORED_DIRS", 1 << 2),
    H::base("GIT_DIFF_INCLUDE_UNTRACKED", 1 << 3),
    H::base("GIT_DIFF_RECURSE_UNTRACKED_DIRS", 1 << 4),
    H::base("GIT_DIFF_INCLUDE_UNMODIFIED", 1 << 5),
    H::base("GIT_DIFF_INCLUDE_TYPECHANGE", 1 << 6),
    H::base("GIT_DIFF_INCLUDE_TYPECHANGE_TREES", 1 << 7),
    H::base("GIT_DIFF_IGNORE_FILEMODE", 1 << 8),
    H::base("GIT_DIFF_IGNORE_SUBMODULES", 1 << 9),
    H::base("GIT_DIFF_IGNORE_CASE", 1 << 10),
    H::base("GIT_DIFF_INCLUDE_CASECHANGE", 1 << 11),
    H::base("GIT_DIFF_DISABLE_PATHSPEC_MATCH", 1 << 12),
    H::base("GIT_DIFF_SKIP_BINARY_CHECK", 1 << 13),
    H::base("GIT_DIFF_ENABLE_FAST_UNTRACKED_DIRS", 1 << 14),
    H::base("GIT_DIFF_UPDATE_INDEX", 1 << 15),
    H::base("GIT_DIFF_INCLUDE_UNREADABLE", 1 << 16),
    H::base("GIT_DIFF_INCLUDE_UNREADABLE_AS_UNTRACKED", 1 << 17),
    H::base("GIT_DIFF_INDENT_HEURISTIC", 1 << 18),
    H::base("GIT_DIFF_IGNORE_BLANK_LINES", 1 << 19),
    H::base("GIT_DIFF_FORCE_TEXT", 1 << 20),
    H::base("GIT_DIFF_FORCE_BINARY", 1 << 21),
    H::base("GIT_DIFF_IGNORE_WHITESPACE", 1 << 22),
    H::base("GIT_DIFF_IGNORE_WHITESPACE_CHANGE", 1 << 23),
    H::base("GIT_DIFF_IGNORE_WHITESPACE_EOL", 1 << 24),
    H::base("GIT_DIFF_SHOW_UNTRACKED_CONTENT", 1 << 25),
    H::base("GIT_DIFF_SHOW_UNMODIFIED", 1 << 26),
    H::base("GIT_DIFF_PATIENCE", 1 << 28),
    H::base("GIT_DIFF_MINIMAL", 1 << 29),
    H::base("GIT_DIFF_SHOW_BINARY", 1 << 30),
    // common.h: features
    H::base("GIT_FEATURE_THREADS", 1 << 0),
    H::base("GIT_FEATURE_HTTPS", 1 << 1),
    H::base("GIT_FEATURE_SSH", 1 << 2),
    H::base("GIT_FEATURE_NSEC", 1 << 3),
    // types.h: file modes
    H::base("GIT_FILEMODE_UNREADABLE", 0),
    H::base("GIT_FILEMODE_TREE", 0o040000),
    H::base("GIT_FILEMODE_BLOB", 0o100644),
    H::base("GIT_FILEMODE_BLOB_EXECUTABLE", 0o100755),
    H::base("GIT_FILEMODE_LINK", 0o120000),
    H::base("GIT_FILEMODE_COMMIT", 0o160000),
    // merge.h
    H::base("GIT_MERGE_ANALYSIS_NONE", 0),
    H::base("GIT_MERGE_ANALYSIS_NORMAL", 1 << 0),
    H::base("GIT_MERGE_ANALYSIS_UP_TO_DATE", 1 << 1),
    H::base("GIT_MERGE_ANALYSIS_FASTFORWARD", 1 << 2),
    H::base("GIT_MERGE_ANALYSIS_UNBORN", 1 << 3),
    H::base("GIT_MERGE_PREFERENCE_NONE", 0),
    H::base("GIT_MERGE_PREFERENCE_NO_FASTFORWARD", 1 << 0),
    H::base("GIT_MERGE_PREFERENCE_FASTFORWARD_ONLY", 1 << 1),
    // common.h: options
    H::base("GIT_OPT_GET_MWINDOW_SIZE", 0),
    H::base("GIT_OPT_SET_MWINDOW_SIZE", 1),
    H::base("GIT_OPT_GET_MWINDOW_MAPPED_LIMIT", 2),
    H::base("GIT_OPT_SET_MWINDOW_MAPPED_LIMIT", 3),
    H::base("GIT_OPT_GET_SEARCH_PATH", 4),
    H::base("GIT_OPT_SET_SEARCH_PATH", 5),
    H::base("GIT_OPT_SET_CACHE_OBJECT_LIMIT", 6),
    H::base("GIT_OPT_SET_CACHE_MAX_SIZE", 7),
    H::base("GIT_OPT_ENABLE_CACHING", 8),
    H::base("GIT_OPT_GET_CACHED_MEMORY", 9),
    H::base("GIT_OPT_GET_TEMPLATE_PATH", 10),
    H::base("GIT_OPT_SET_TEMPLATE_PATH", 11),
    H::base("GIT_OPT_SET_SSL_CERT_LOCATIONS", 12),
    H::base("GIT_OPT_SET_USER_AGENT", 13),
    H::base("GIT_OPT_ENABLE_STRICT_OBJECT_CREATION", 14),
    H::base("GIT_OPT_ENABLE_STRICT_SYMBOLIC_REF_CREATION", 15),
    H::base("GIT_OPT_SET_SSL_CIPHERS", 16),
    H::base("GIT_OPT_GET_USER_AGENT", 17),
    H::base("GIT_OPT_ENABLE_OFS_DELTA", 18),
    H::base("GIT_OPT_ENABLE_FSYNC_GITDIR", 19),
    H::base("GIT_OPT_GET_WINDOWS_SHAREMODE", 20),
    H::base("GIT_OPT_SET_WINDOWS_SHAREMODE", 21),
    H::base("GIT_OPT_ENABLE_STRICT_HASH_VERIFICATION", 22),
    H::base("GIT_OPT_SET_ALLOCATOR", 23),
    H::base("GIT_OPT_ENABLE_UNSAVED_INDEX_SAFETY", 24),
    H::base("GIT_OPT_GET_PACK_MAX_OBJECTS", 25),
    H::base("GIT_OPT_SET_PACK_MAX_OBJECTS", 26),
    H::base("GIT_OPT_DISABLE_PACK_KEEP_FILE_CHECKS", 27),
    H::since("GIT_OPT_GET_OWNER_VALIDATION", 35, 1, 5),
    H::since("GIT_OPT_SET_OWNER_VALIDATION", 36, 1, 5),
    // types.h: references
    H::base("GIT_REFERENCE_INVALID", 0),
    H::base("GIT_REFERENCE_DIRECT", 1),
    H::base("GIT_REFERENCE_SYMBOLIC", 2),
    H::base("GIT_REFERENCE_ALL", 3),
    // repository.h: init
    H::base("GIT_REPOSITORY_INIT_BARE", 1 << 0),
    H::base("GIT_REPOSITORY_INIT_NO_REINIT", 1 << 1),
    H::base("GIT_REPOSITORY_INIT_NO_DOTGIT_DIR", 1 << 2),
    H::base("GIT_REPOSITORY_INIT_MKDIR", 1 << 3),
    H::base("GIT_REPOSITORY_INIT_MKPATH", 1 << 4),
    H::base("GIT_REPOSITORY_INIT_EXTERNAL_TEMPLATE", 1 << 5),
    H::base("GIT_REPOSITORY_INIT_RELATIVE_GITLINK", 1 << 6),
    H::base("GIT_REPOSITORY_INIT_SHARED_UMASK", 0),
    H::base("GIT_REPOSITORY_INIT_SHARED_GROUP", 0o002775),
    H::base("GIT_REPOSITORY_INIT_SHARED_ALL", 0o002777),
    // repository.h: open
    H::base("GIT_REPOSITORY_OPEN_NO_SEARCH", 1 << 0),
    H::base("GIT_REPOSITORY_OPEN_CROSS_FS", 1 << 1),
    H::base("GIT_REPOSITORY_OPEN_BARE", 1 << 2),
    H::base("GIT_REPOSITORY_OPEN_NO_DOTGIT", 1 << 3),
    H::base("GIT_REPOSITORY_OPEN_FROM_ENV", 1 << 4),
    // repository.h: state
    H::base("GIT_REPOSITORY_STATE_NONE", 0),
    H::base("GIT_REPOSITORY_STATE_MERGE", 1),
    H::base("GIT_REPOSITORY_STATE_REVERT", 2),
    H::base("GIT_REPOSITORY_STATE_REVERT_SEQUENCE", 3),
    H::base("GIT_REPOSITORY_STATE_CHERRYPICK", 4),
    H::base("GIT_REPOSITORY_STATE_CHERRYPICK_SEQUENCE", 5),
    H::base("GIT_REPOSITORY_STATE_BISECT", 6),
    H::base("GIT_REPOSITORY_STATE_REBASE", 7),
    H::base("GIT_REPOSITORY_STATE_REBASE_INTERACTIVE", 8),
    H::base("GIT_REPOSITORY_STATE_REBASE_MERGE", 9),
    H::base("GIT_REPOSITORY_STATE_APPLY_MAILBOX", 10),
    H::base("GIT_REPOSITORY_STATE_APPLY_MAILBOX_OR_REBASE", 11),
    // reset.h
    H::base("GIT_RESET_SOFT", 1),
    H::base("GIT_RESET_MIXED", 2),
    H::base("GIT_RESET_HARD", 3),
    // revwalk.h
    H::base("GIT_SORT_NONE", 0),
    H::base("GIT_SORT_TOPOLOGICAL", 1 << 0),
    H::base("GIT_SORT_TIME", 1 << 1),
    H::base("GIT_SORT_REVERSE", 1 << 2),
    // stash.h
    H::base("GIT_STASH_APPLY_PROGRESS_NONE", 0),
    H::base("GIT_STASH_APPLY_PROGRESS_LOADING_STASH", 1),
    H::base("GIT_STASH_APPLY_PROGRESS_ANALYZE_INDEX", 2),
    H::base("GIT_STASH_APPLY_PROGRESS_ANALYZE_MODIFIED", 3),
    H::base("GIT_STASH_APPLY_PROGRESS_ANALYZE_UNTRACKED", 4),
    H::base("GIT_STASH_APPLY_PROGRESS_CHECKOUT_UNTRACKED", 5),
    H::base("GIT_STASH_APPLY_PROGRESS_CHECKOUT_MODIFIED", 6),
    H::base("GIT_STASH_APPLY_PROGRESS_DONE", 7),
    // submodule.h / types.h
    H::base("GIT_SUBMODULE_IGNORE_UNSPECIFIED", -1),
    H::base("GIT_SUBMODULE_IGNORE_NONE", 1),
    H::base("GIT_SUBMODULE_IGNORE_UNTRACKED", 2),
    H::base("GIT_SUBMODULE_IGNORE_DIRTY", 3),
    H::base("GIT_SUBMODULE_IGNORE_ALL", 4),
    H::base("GIT_SUBMODULE_STATUS_IN_HEAD", 1 << 0),
    H::base("GIT_SUBMODULE_STATUS_IN_INDEX", 1 << 1),
    H::base("GIT_SUBMODULE_STATUS_IN_CONFIG", 1 << 2),
    H::base("GIT_SUBMODULE_STATUS_IN_WD", 1 << 3),
    H::base("GIT_SUBMODULE_STATUS_INDEX_ADDED", 1 << 4),
    H::base("GIT_SUBMODULE_STATUS_INDEX_DELETED", 1 << 5),
    H::base("GIT_SUBMODULE_STATUS_INDEX_MODIFIED", 1 << 6),
    H::base("GIT_SUBMODULE_STATUS_WD_UNINITIALIZED", 1 << 7),
    H::base("GIT_SUBMODULE_STATUS_WD_ADDED", 1 << 8),
    H::base("GIT_SUBMODULE_STATUS_WD_DELETED", 1 << 9),
    H::base("GIT_SUBMODULE_STATUS_WD_MODIFIED", 1 << 10),
    H::base("GIT_SUBMODULE_STATUS_WD_INDEX_MODIFIED", 1 << 11),
    H::base("GIT_SUBMODULE_STATUS_WD_WD_MODIFIED", 1 << 12),
    H::base("GIT_SUBMODULE_STATUS_WD_UNTRACKED", 1 << 13),
];

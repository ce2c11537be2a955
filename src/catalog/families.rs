//! catalog::families
//!
//! Family and member definitions, one table per family.

use super::{FamilyDef, MemberDef as M, Width};
use crate::core::types::Family;

pub(super) static FAMILIES: &[FamilyDef] = &[
    FamilyDef {
        family: Family::ApplyLocation,
        width: Width::I32,
        doc: "Where a patch is applied.",
        members: APPLY_LOCATION,
    },
    FamilyDef {
        family: Family::AttrCheck,
        width: Width::U32,
        doc: "Where attribute lookups read from.",
        members: ATTR_CHECK,
    },
    FamilyDef {
        family: Family::BlameFlag,
        width: Width::U32,
        doc: "Blame options.",
        members: BLAME_FLAG,
    },
    FamilyDef {
        family: Family::BranchType,
        width: Width::U32,
        doc: "Branch kinds to list or look up.",
        members: BRANCH_TYPE,
    },
    FamilyDef {
        family: Family::CheckoutNotify,
        width: Width::U32,
        doc: "Which checkout events invoke the notification callback.",
        members: CHECKOUT_NOTIFY,
    },
    FamilyDef {
        family: Family::CheckoutStrategy,
        width: Width::U32,
        doc: "How checkout updates the working directory and index.",
        members: CHECKOUT_STRATEGY,
    },
    FamilyDef {
        family: Family::DiffFind,
        width: Width::U32,
        doc: "Rename and copy detection.",
        members: DIFF_FIND,
    },
    FamilyDef {
        family: Family::DiffOption,
        width: Width::U32,
        doc: "Flags for diff generation.",
        members: DIFF_OPTION,
    },
    FamilyDef {
        family: Family::Feature,
        width: Width::U32,
        doc: "Features libgit2 was compiled with.",
        members: FEATURE,
    },
    FamilyDef {
        family: Family::FileMode,
        width: Width::I32,
        doc: "Tree entry modes.",
        members: FILE_MODE,
    },
    FamilyDef {
        family: Family::MergeAnalysis,
        width: Width::U32,
        doc: "Merge opportunities reported by merge analysis.",
        members: MERGE_ANALYSIS,
    },
    FamilyDef {
        family: Family::MergePreference,
        width: Width::U32,
        doc: "The configured preference for merges.",
        members: MERGE_PREFERENCE,
    },
    FamilyDef {
        family: Family::Option,
        width: Width::I32,
        doc: "Global library options.",
        members: OPTION,
    },
    FamilyDef {
        family: Family::ReferenceFilter,
        width: Width::I32,
        doc: "Reference iterator filters.",
        members: REFERENCE_FILTER,
    },
    FamilyDef {
        family: Family::ReferenceType,
        width: Width::U32,
        doc: "Basic type of a reference.",
        members: REFERENCE_TYPE,
    },
    FamilyDef {
        family: Family::RepositoryInitFlag,
        width: Width::U32,
        doc: "Repository initialization flags.",
        members: REPOSITORY_INIT_FLAG,
    },
    FamilyDef {
        family: Family::RepositoryInitMode,
        width: Width::U32,
        doc: "Shared mode for repository initialization.",
        members: REPOSITORY_INIT_MODE,
    },
    FamilyDef {
        family: Family::RepositoryOpenFlag,
        width: Width::U32,
        doc: "Repository open flags.",
        members: REPOSITORY_OPEN_FLAG,
    },
    FamilyDef {
        family: Family::RepositoryState,
        width: Width::I32,
        doc: "Operation in progress in a repository.",
        members: REPOSITORY_STATE,
    },
    FamilyDef {
        family: Family::ResetMode,
        width: Width::I32,
        doc: "Kinds of reset.",
        members: RESET_MODE,
    },
    FamilyDef {
        family: Family::SortMode,
        width: Width::U32,
        doc: "Revision walk ordering.",
        members: SORT_MODE,
    },
    FamilyDef {
        family: Family::StashApplyProgress,
        width: Width::I32,
        doc: "Stash apply progress stages.",
        members: STASH_APPLY_PROGRESS,
    },
    FamilyDef {
        family: Family::SubmoduleIgnore,
        width: Width::I32,
        doc: "Submodule ignore rules.",
        members: SUBMODULE_IGNORE,
    },
    FamilyDef {
        family: Family::SubmoduleStatus,
        width: Width::U32,
        doc: "Submodule status bits.",
        members: SUBMODULE_STATUS,
    },
];

const APPLY_LOCATION: &[M] = &[
    M::native(
        "WORKDIR",
        "GIT_APPLY_LOCATION_WORKDIR",
        "Apply to the working directory only, like `git apply`.",
    ),
    M::native(
        "INDEX",
        "GIT_APPLY_LOCATION_INDEX",
        "Apply to the index only, like `git apply --cached`.",
    ),
    M::native(
        "BOTH",
        "GIT_APPLY_LOCATION_BOTH",
        "Apply to both the working directory and the index, like `git apply --index`.",
    ),
];

const ATTR_CHECK: &[M] = &[
    M::native(
        "FILE_THEN_INDEX",
        "GIT_ATTR_CHECK_FILE_THEN_INDEX",
        "Check the working tree file, then the index.",
    ),
    M::native(
        "INDEX_THEN_FILE",
        "GIT_ATTR_CHECK_INDEX_THEN_FILE",
        "Check the index, then the working tree file.",
    ),
    M::native("INDEX_ONLY", "GIT_ATTR_CHECK_INDEX_ONLY", "Check the index only."),
    M::native("NO_SYSTEM", "GIT_ATTR_CHECK_NO_SYSTEM", "Skip the system gitattributes file."),
    M::native(
        "INCLUDE_HEAD",
        "GIT_ATTR_CHECK_INCLUDE_HEAD",
        "Also read `.gitattributes` from HEAD.",
    ),
    M::native(
        "INCLUDE_COMMIT",
        "GIT_ATTR_CHECK_INCLUDE_COMMIT",
        "Also read `.gitattributes` from a given commit.",
    ),
];

const BLAME_FLAG: &[M] = &[
    M::native("NORMAL", "GIT_BLAME_NORMAL", "Normal blame, the default."),
    M::reserved(
        "TRACK_COPIES_SAME_FILE",
        "GIT_BLAME_TRACK_COPIES_SAME_FILE",
        "Reserved; not implemented by libgit2.",
    ),
    M::reserved(
        "TRACK_COPIES_SAME_COMMIT_MOVES",
        "GIT_BLAME_TRACK_COPIES_SAME_COMMIT_MOVES",
        "Reserved; not implemented by libgit2.",
    ),
    M::reserved(
        "TRACK_COPIES_SAME_COMMIT_COPIES",
        "GIT_BLAME_TRACK_COPIES_SAME_COMMIT_COPIES",
        "Reserved; not implemented by libgit2.",
    ),
    M::reserved(
        "TRACK_COPIES_ANY_COMMIT_COPIES",
        "GIT_BLAME_TRACK_COPIES_ANY_COMMIT_COPIES",
        "Reserved; not implemented by libgit2.",
    ),
    M::native(
        "FIRST_PARENT",
        "GIT_BLAME_FIRST_PARENT",
        "Only follow first parents when searching commits.",
    ),
    M::native(
        "USE_MAILMAP",
        "GIT_BLAME_USE_MAILMAP",
        "Map author and committer identities through the mailmap.",
    ),
    M::native("IGNORE_WHITESPACE", "GIT_BLAME_IGNORE_WHITESPACE", "Ignore whitespace differences."),
];

const BRANCH_TYPE: &[M] = &[
    M::native("LOCAL", "GIT_BRANCH_LOCAL", "Local branches."),
    M::native("REMOTE", "GIT_BRANCH_REMOTE", "Remote-tracking branches."),
    M::native("ALL", "GIT_BRANCH_ALL", "Local and remote-tracking branches."),
];

const CHECKOUT_NOTIFY: &[M] = &[
    M::native("NONE", "GIT_CHECKOUT_NOTIFY_NONE", "No notifications."),
    M::native("CONFLICT", "GIT_CHECKOUT_NOTIFY_CONFLICT", "Notify on conflicting paths."),
    M::native(
        "DIRTY",
        "GIT_CHECKOUT_NOTIFY_DIRTY",
        "Notify on files that need no update but no longer match the baseline.",
    ),
    M::native("UPDATED", "GIT_CHECKOUT_NOTIFY_UPDATED", "Notify on every changed file."),
    M::native("UNTRACKED", "GIT_CHECKOUT_NOTIFY_UNTRACKED", "Notify on untracked files."),
    M::alias(
        "IGNORED",
        "UNTRACKED",
        "Notify on ignored files. Shares the value of UNTRACKED.",
    ),
    M::native("ALL", "GIT_CHECKOUT_NOTIFY_ALL", "Every notification."),
];

const CHECKOUT_STRATEGY: &[M] = &[
    M::native("NONE", "GIT_CHECKOUT_NONE", "Dry run, no actual updates."),
    M::native(
        "SAFE",
        "GIT_CHECKOUT_SAFE",
        "Only make updates that cannot lose uncommitted data. FORCE wins over SAFE.",
    ),
    M::native(
        "FORCE",
        "GIT_CHECKOUT_FORCE",
        "Make the working directory match the target, whatever it holds.",
    ),
    M::native("RECREATE_MISSING", "GIT_CHECKOUT_RECREATE_MISSING", "Recreate missing files."),
    M::native(
        "ALLOW_CONFLICTS",
        "GIT_CHECKOUT_ALLOW_CONFLICTS",
        "Make safe updates even when conflicts are found.",
    ),
    M::native(
        "REMOVE_UNTRACKED",
        "GIT_CHECKOUT_REMOVE_UNTRACKED",
        "Remove untracked files that are not ignored.",
    ),
    M::native(
        "REMOVE_IGNORED",
        "GIT_CHECKOUT_REMOVE_IGNORED",
        "Remove ignored files not in the index.",
    ),
    M::native(
        "UPDATE_ONLY",
        "GIT_CHECKOUT_UPDATE_ONLY",
        "Update existing files only; create nothing.",
    ),
    M::native(
        "DONT_UPDATE_INDEX",
        "GIT_CHECKOUT_DONT_UPDATE_INDEX",
        "Leave index entries alone. Implies DONT_WRITE_INDEX.",
    ),
    M::native("NO_REFRESH", "GIT_CHECKOUT_NO_REFRESH", "Skip refreshing index and config first."),
    M::native("SKIP_UNMERGED", "GIT_CHECKOUT_SKIP_UNMERGED", "Skip unmerged files."),
    M::native("USE_OURS", "GIT_CHECKOUT_USE_OURS", "Check out stage 2 of unmerged files."),
    M::native("USE_THEIRS", "GIT_CHECKOUT_USE_THEIRS", "Check out stage 3 of unmerged files."),
    M::native(
        "DISABLE_PATHSPEC_MATCH",
        "GIT_CHECKOUT_DISABLE_PATHSPEC_MATCH",
        "Treat pathspecs as exact paths.",
    ),
    M::native(
        "SKIP_LOCKED_DIRECTORIES",
        "GIT_CHECKOUT_SKIP_LOCKED_DIRECTORIES",
        "Leave directories that are in use empty.",
    ),
    M::native(
        "DONT_OVERWRITE_IGNORED",
        "GIT_CHECKOUT_DONT_OVERWRITE_IGNORED",
        "Keep ignored files that exist in the target.",
    ),
    M::native(
        "CONFLICT_STYLE_MERGE",
        "GIT_CHECKOUT_CONFLICT_STYLE_MERGE",
        "Write plain merge conflict files.",
    ),
    M::native(
        "CONFLICT_STYLE_DIFF3",
        "GIT_CHECKOUT_CONFLICT_STYLE_DIFF3",
        "Write diff3 conflict files with the common ancestor.",
    ),
    M::native(
        "DONT_REMOVE_EXISTING",
        "GIT_CHECKOUT_DONT_REMOVE_EXISTING",
        "Never overwrite existing files or directories.",
    ),
    M::native(
        "DONT_WRITE_INDEX",
        "GIT_CHECKOUT_DONT_WRITE_INDEX",
        "Skip writing the index when done.",
    ),
    M::native(
        "DRY_RUN",
        "GIT_CHECKOUT_DRY_RUN",
        "Send notifications, then stop without touching the working directory or index.",
    ),
    M::alias(
        "CONFLICT_STYLE_ZDIFF3",
        "CONFLICT_STYLE_DIFF3",
        "Write zdiff3 conflict files. Shares the value of CONFLICT_STYLE_DIFF3.",
    ),
];

const DIFF_FIND: &[M] = &[
    M::native(
        "FIND_BY_CONFIG",
        "GIT_DIFF_FIND_BY_CONFIG",
        "Follow `diff.renames`. Any other FIND_ flag overrides it.",
    ),
    M::native("FIND_RENAMES", "GIT_DIFF_FIND_RENAMES", "Look for renames (`--find-renames`)."),
    M::native(
        "FIND_RENAMES_FROM_REWRITES",
        "GIT_DIFF_FIND_RENAMES_FROM_REWRITES",
        "Consider the old side of modified files for renames.",
    ),
    M::native("FIND_COPIES", "GIT_DIFF_FIND_COPIES", "Look for copies (`--find-copies`)."),
    M::native(
        "FIND_COPIES_FROM_UNMODIFIED",
        "GIT_DIFF_FIND_COPIES_FROM_UNMODIFIED",
        "Use unmodified files as copy sources. Needs a diff built with INCLUDE_UNMODIFIED.",
    ),
    M::native("FIND_REWRITES", "GIT_DIFF_FIND_REWRITES", "Mark large rewrites for splitting."),
    M::native(
        "BREAK_REWRITES",
        "GIT_DIFF_BREAK_REWRITES",
        "Split large rewrites into delete/add pairs.",
    ),
    M::native(
        "FIND_AND_BREAK_REWRITES",
        "GIT_DIFF_FIND_AND_BREAK_REWRITES",
        "FIND_REWRITES and BREAK_REWRITES together.",
    ),
    M::native(
        "FIND_FOR_UNTRACKED",
        "GIT_DIFF_FIND_FOR_UNTRACKED",
        "Detect renames and copies for untracked files. Needs INCLUDE_UNTRACKED.",
    ),
    M::native("FIND_ALL", "GIT_DIFF_FIND_ALL", "Every finding feature."),
    M::native(
        "FIND_IGNORE_LEADING_WHITESPACE",
        "GIT_DIFF_FIND_IGNORE_LEADING_WHITESPACE",
        "Measure similarity ignoring leading whitespace (the default).",
    ),
    M::native(
        "FIND_IGNORE_WHITESPACE",
        "GIT_DIFF_FIND_IGNORE_WHITESPACE",
        "Measure similarity ignoring all whitespace.",
    ),
    M::native(
        "FIND_DONT_IGNORE_WHITESPACE",
        "GIT_DIFF_FIND_DONT_IGNORE_WHITESPACE",
        "Measure similarity over all data.",
    ),
    M::native(
        "FIND_EXACT_MATCH_ONLY",
        "GIT_DIFF_FIND_EXACT_MATCH_ONLY",
        "Measure similarity by object id only.",
    ),
    M::native(
        "BREAK_REWRITES_FOR_RENAMES_ONLY",
        "GIT_DIFF_BREAK_REWRITES_FOR_RENAMES_ONLY",
        "Only keep a broken rewrite if it ends up as a rename or copy.",
    ),
    M::native(
        "FIND_REMOVE_UNMODIFIED",
        "GIT_DIFF_FIND_REMOVE_UNMODIFIED",
        "Drop unmodified deltas once detection is done.",
    ),
];

const DIFF_OPTION: &[M] = &[
    M::native("NORMAL", "GIT_DIFF_NORMAL", "Normal diff, the default."),
    M::native("REVERSE", "GIT_DIFF_REVERSE", "Swap the sides of the diff."),
    M::native("INCLUDE_IGNORED", "GIT_DIFF_INCLUDE_IGNORED", "Include ignored files."),
    M::native(
        "RECURSE_IGNORED_DIRS",
        "GIT_DIFF_RECURSE_IGNORED_DIRS",
        "List every file under ignored directories.",
    ),
    M::native("INCLUDE_UNTRACKED", "GIT_DIFF_INCLUDE_UNTRACKED", "Include untracked files."),
    M::native(
        "RECURSE_UNTRACKED_DIRS",
        "GIT_DIFF_RECURSE_UNTRACKED_DIRS",
        "List every file under untracked directories.",
    ),
    M::native("INCLUDE_UNMODIFIED", "GIT_DIFF_INCLUDE_UNMODIFIED", "Include unmodified files."),
    M::native(
        "INCLUDE_TYPECHANGE",
        "GIT_DIFF_INCLUDE_TYPECHANGE",
        "Emit TYPECHANGE records instead of delete/add pairs.",
    ),
    M::native(
        "INCLUDE_TYPECHANGE_TREES",
        "GIT_DIFF_INCLUDE_TYPECHANGE_TREES",
        "Also label blob to tree transitions as TYPECHANGE.",
    ),
    M::native("IGNORE_FILEMODE", "GIT_DIFF_IGNORE_FILEMODE", "Ignore file mode changes."),
    M::native(
        "IGNORE_SUBMODULES",
        "GIT_DIFF_IGNORE_SUBMODULES",
        "Treat all submodules as unmodified.",
    ),
    M::native("IGNORE_CASE", "GIT_DIFF_IGNORE_CASE", "Compare file names case-insensitively."),
    M::native(
        "INCLUDE_CASECHANGE",
        "GIT_DIFF_INCLUDE_CASECHANGE",
        "With IGNORE_CASE, report case-only renames as add/delete pairs.",
    ),
    M::native(
        "DISABLE_PATHSPEC_MATCH",
        "GIT_DIFF_DISABLE_PATHSPEC_MATCH",
        "Treat pathspecs as literal paths.",
    ),
    M::native(
        "SKIP_BINARY_CHECK",
        "GIT_DIFF_SKIP_BINARY_CHECK",
        "Don't compute the binary flag of deltas.",
    ),
    M::native(
        "ENABLE_FAST_UNTRACKED_DIRS",
        "GIT_DIFF_ENABLE_FAST_UNTRACKED_DIRS",
        "Label untracked directories without scanning their contents.",
    ),
    M::native(
        "UPDATE_INDEX",
        "GIT_DIFF_UPDATE_INDEX",
        "Write refreshed stat data back to the index.",
    ),
    M::native("INCLUDE_UNREADABLE", "GIT_DIFF_INCLUDE_UNREADABLE", "Include unreadable files."),
    M::native(
        "INCLUDE_UNREADABLE_AS_UNTRACKED",
        "GIT_DIFF_INCLUDE_UNREADABLE_AS_UNTRACKED",
        "Include unreadable files as untracked.",
    ),
    M::native(
        "INDENT_HEURISTIC",
        "GIT_DIFF_INDENT_HEURISTIC",
        "Use indentation to place ambiguous hunks.",
    ),
    M::native("IGNORE_BLANK_LINES", "GIT_DIFF_IGNORE_BLANK_LINES", "Ignore blank lines."),
    M::native("FORCE_TEXT", "GIT_DIFF_FORCE_TEXT", "Treat every file as text."),
    M::native("FORCE_BINARY", "GIT_DIFF_FORCE_BINARY", "Treat every file as binary."),
    M::native("IGNORE_WHITESPACE", "GIT_DIFF_IGNORE_WHITESPACE", "Ignore all whitespace."),
    M::native(
        "IGNORE_WHITESPACE_CHANGE",
        "GIT_DIFF_IGNORE_WHITESPACE_CHANGE",
        "Ignore changes in the amount of whitespace.",
    ),
    M::native(
        "IGNORE_WHITESPACE_EOL",
        "GIT_DIFF_IGNORE_WHITESPACE_EOL",
        "Ignore whitespace at end of line.",
    ),
    M::native(
        "SHOW_UNTRACKED_CONTENT",
        "GIT_DIFF_SHOW_UNTRACKED_CONTENT",
        "Include untracked file contents in patches. Turns on INCLUDE_UNTRACKED.",
    ),
    M::native(
        "SHOW_UNMODIFIED",
        "GIT_DIFF_SHOW_UNMODIFIED",
        "List unmodified files in name-only style outputs.",
    ),
    M::native("PATIENCE", "GIT_DIFF_PATIENCE", "Use the patience diff algorithm."),
    M::native("MINIMAL", "GIT_DIFF_MINIMAL", "Spend extra time to find a minimal diff."),
    M::native(
        "SHOW_BINARY",
        "GIT_DIFF_SHOW_BINARY",
        "Include binary deltas so `git apply` can apply them.",
    ),
];

const FEATURE: &[M] = &[
    M::native("THREADS", "GIT_FEATURE_THREADS", "Built thread-aware."),
    M::native("HTTPS", "GIT_FEATURE_HTTPS", "Built with HTTPS transport."),
    M::native("SSH", "GIT_FEATURE_SSH", "Built with SSH transport."),
    M::native("NSEC", "GIT_FEATURE_NSEC", "Built with sub-second file timestamps."),
];

const FILE_MODE: &[M] = &[
    M::native("UNREADABLE", "GIT_FILEMODE_UNREADABLE", "Unreadable entry."),
    M::native("TREE", "GIT_FILEMODE_TREE", "Directory."),
    M::native("BLOB", "GIT_FILEMODE_BLOB", "Regular file."),
    M::native("BLOB_EXECUTABLE", "GIT_FILEMODE_BLOB_EXECUTABLE", "Executable file."),
    M::native("LINK", "GIT_FILEMODE_LINK", "Symbolic link."),
    M::native("COMMIT", "GIT_FILEMODE_COMMIT", "Submodule commit."),
];

const MERGE_ANALYSIS: &[M] = &[
    M::native("NONE", "GIT_MERGE_ANALYSIS_NONE", "No merge is possible. Unused."),
    M::native(
        "NORMAL",
        "GIT_MERGE_ANALYSIS_NORMAL",
        "HEAD and the input have diverged and must be merged.",
    ),
    M::native(
        "UP_TO_DATE",
        "GIT_MERGE_ANALYSIS_UP_TO_DATE",
        "Every input is reachable from HEAD; nothing to merge.",
    ),
    M::native(
        "FASTFORWARD",
        "GIT_MERGE_ANALYSIS_FASTFORWARD",
        "The input is a fast-forward from HEAD; check it out instead of merging.",
    ),
    M::native(
        "UNBORN",
        "GIT_MERGE_ANALYSIS_UNBORN",
        "HEAD is unborn; point it at the target instead of merging.",
    ),
];

const MERGE_PREFERENCE: &[M] = &[
    M::native("NONE", "GIT_MERGE_PREFERENCE_NONE", "No merge preference configured."),
    M::native(
        "NO_FASTFORWARD",
        "GIT_MERGE_PREFERENCE_NO_FASTFORWARD",
        "`merge.ff=false`: fast-forwards are not wanted.",
    ),
    M::native(
        "FASTFORWARD_ONLY",
        "GIT_MERGE_PREFERENCE_FASTFORWARD_ONLY",
        "`merge.ff=only`: only fast-forwards are wanted.",
    ),
];

const OPTION: &[M] = &[
    M::native("GET_MWINDOW_SIZE", "GIT_OPT_GET_MWINDOW_SIZE", "Read the mmap window size."),
    M::native("SET_MWINDOW_SIZE", "GIT_OPT_SET_MWINDOW_SIZE", "Set the mmap window size."),
    M::native(
        "GET_MWINDOW_MAPPED_LIMIT",
        "GIT_OPT_GET_MWINDOW_MAPPED_LIMIT",
        "Read the limit on mapped pack memory.",
    ),
    M::native(
        "SET_MWINDOW_MAPPED_LIMIT",
        "GIT_OPT_SET_MWINDOW_MAPPED_LIMIT",
        "Set the limit on mapped pack memory.",
    ),
    M::native(
        "GET_SEARCH_PATH",
        "GIT_OPT_GET_SEARCH_PATH",
        "Read the search path for one configuration level.",
    ),
    M::native(
        "SET_SEARCH_PATH",
        "GIT_OPT_SET_SEARCH_PATH",
        "Set the search path for one configuration level.",
    ),
    M::native(
        "SET_CACHE_OBJECT_LIMIT",
        "GIT_OPT_SET_CACHE_OBJECT_LIMIT",
        "Set the cache size limit for one object type.",
    ),
    M::native(
        "SET_CACHE_MAX_SIZE",
        "GIT_OPT_SET_CACHE_MAX_SIZE",
        "Set the maximum total size of the object cache.",
    ),
    M::native("ENABLE_CACHING", "GIT_OPT_ENABLE_CACHING", "Turn the object cache on or off."),
    M::native(
        "GET_CACHED_MEMORY",
        "GIT_OPT_GET_CACHED_MEMORY",
        "Read the current and maximum cache usage.",
    ),
    M::native("GET_TEMPLATE_PATH", "GIT_OPT_GET_TEMPLATE_PATH", "Read the default template path."),
    M::native("SET_TEMPLATE_PATH", "GIT_OPT_SET_TEMPLATE_PATH", "Set the default template path."),
    M::native(
        "SET_SSL_CERT_LOCATIONS",
        "GIT_OPT_SET_SSL_CERT_LOCATIONS",
        "Set the CA certificate file and directory.",
    ),
    M::native("SET_USER_AGENT", "GIT_OPT_SET_USER_AGENT", "Set the user agent sent over HTTP."),
    M::native(
        "ENABLE_STRICT_OBJECT_CREATION",
        "GIT_OPT_ENABLE_STRICT_OBJECT_CREATION",
        "Validate object references when creating objects.",
    ),
    M::native(
        "ENABLE_STRICT_SYMBOLIC_REF_CREATION",
        "GIT_OPT_ENABLE_STRICT_SYMBOLIC_REF_CREATION",
        "Validate targets when creating symbolic references.",
    ),
    M::native("SET_SSL_CIPHERS", "GIT_OPT_SET_SSL_CIPHERS", "Set the SSL ciphers used for HTTPS."),
    M::native("GET_USER_AGENT", "GIT_OPT_GET_USER_AGENT", "Read the user agent sent over HTTP."),
    M::native("ENABLE_OFS_DELTA", "GIT_OPT_ENABLE_OFS_DELTA", "Allow offset deltas in packs."),
    M::native(
        "ENABLE_FSYNC_GITDIR",
        "GIT_OPT_ENABLE_FSYNC_GITDIR",
        "Flush written objects and references to disk.",
    ),
    M::native(
        "GET_WINDOWS_SHAREMODE",
        "GIT_OPT_GET_WINDOWS_SHAREMODE",
        "Read the Windows file share mode.",
    ),
    M::native(
        "SET_WINDOWS_SHAREMODE",
        "GIT_OPT_SET_WINDOWS_SHAREMODE",
        "Set the Windows file share mode.",
    ),
    M::native(
        "ENABLE_STRICT_HASH_VERIFICATION",
        "GIT_OPT_ENABLE_STRICT_HASH_VERIFICATION",
        "Verify object hashes when reading objects.",
    ),
    M::native("SET_ALLOCATOR", "GIT_OPT_SET_ALLOCATOR", "Install a custom memory allocator."),
    M::native(
        "ENABLE_UNSAVED_INDEX_SAFETY",
        "GIT_OPT_ENABLE_UNSAVED_INDEX_SAFETY",
        "Refuse to overwrite an index with unsaved changes.",
    ),
    M::native(
        "GET_PACK_MAX_OBJECTS",
        "GIT_OPT_GET_PACK_MAX_OBJECTS",
        "Read the maximum number of objects in a pack.",
    ),
    M::native(
        "SET_PACK_MAX_OBJECTS",
        "GIT_OPT_SET_PACK_MAX_OBJECTS",
        "Set the maximum number of objects in a pack.",
    ),
    M::native(
        "DISABLE_PACK_KEEP_FILE_CHECKS",
        "GIT_OPT_DISABLE_PACK_KEEP_FILE_CHECKS",
        "Stop checking for `.keep` files next to packs.",
    ),
    M::native(
        "GET_OWNER_VALIDATION",
        "GIT_OPT_GET_OWNER_VALIDATION",
        "Read whether repository ownership is validated.",
    ),
    M::native(
        "SET_OWNER_VALIDATION",
        "GIT_OPT_SET_OWNER_VALIDATION",
        "Turn repository ownership validation on or off.",
    ),
];

const REFERENCE_FILTER: &[M] = &[
    M::fixed("ALL", 0, "Every reference."),
    M::fixed("BRANCHES", 1, "Branches only."),
    M::fixed("TAGS", 2, "Tags only."),
];

const REFERENCE_TYPE: &[M] = &[
    M::native("INVALID", "GIT_REFERENCE_INVALID", "Invalid reference."),
    M::native("OID", "GIT_REFERENCE_DIRECT", "Points at an object id."),
    M::native("SYMBOLIC", "GIT_REFERENCE_SYMBOLIC", "Points at another reference."),
    M::native("LISTALL", "GIT_REFERENCE_ALL", "Direct and symbolic references."),
];

const REPOSITORY_INIT_FLAG: &[M] = &[
    M::native("BARE", "GIT_REPOSITORY_INIT_BARE", "Create a bare repository."),
    M::native(
        "NO_REINIT",
        "GIT_REPOSITORY_INIT_NO_REINIT",
        "Fail if the path already looks like a repository.",
    ),
    M::native(
        "NO_DOTGIT_DIR",
        "GIT_REPOSITORY_INIT_NO_DOTGIT_DIR",
        "Don't append `/.git` to the path of a non-bare repository.",
    ),
    M::native(
        "MKDIR",
        "GIT_REPOSITORY_INIT_MKDIR",
        "Create the last component of the repository and workdir paths.",
    ),
    M::native(
        "MKPATH",
        "GIT_REPOSITORY_INIT_MKPATH",
        "Create every missing component of the repository and workdir paths.",
    ),
    M::native(
        "EXTERNAL_TEMPLATE",
        "GIT_REPOSITORY_INIT_EXTERNAL_TEMPLATE",
        "Use external templates instead of the built-in ones.",
    ),
    M::native(
        "RELATIVE_GITLINK",
        "GIT_REPOSITORY_INIT_RELATIVE_GITLINK",
        "Use relative paths for the gitdir and `core.worktree` of a separate workdir.",
    ),
];

const REPOSITORY_INIT_MODE: &[M] = &[
    M::native(
        "SHARED_UMASK",
        "GIT_REPOSITORY_INIT_SHARED_UMASK",
        "Permissions from the umask, the default.",
    ),
    M::native(
        "SHARED_GROUP",
        "GIT_REPOSITORY_INIT_SHARED_GROUP",
        "`--shared=group`: group writable with sticky group.",
    ),
    M::native(
        "SHARED_ALL",
        "GIT_REPOSITORY_INIT_SHARED_ALL",
        "`--shared=all`: group writable and world readable.",
    ),
];

const REPOSITORY_OPEN_FLAG: &[M] = &[
    M::fixed("DEFAULT", 0, "Default flags."),
    M::native(
        "NO_SEARCH",
        "GIT_REPOSITORY_OPEN_NO_SEARCH",
        "Only open the repository at the start path; don't walk up.",
    ),
    M::native(
        "CROSS_FS",
        "GIT_REPOSITORY_OPEN_CROSS_FS",
        "Keep searching across filesystem boundaries.",
    ),
    M::native(
        "BARE",
        "GIT_REPOSITORY_OPEN_BARE",
        "Open as bare regardless of `core.bare`, deferring config loading.",
    ),
    M::native(
        "NO_DOTGIT",
        "GIT_REPOSITORY_OPEN_NO_DOTGIT",
        "Don't try the start path with `/.git` appended.",
    ),
    M::native(
        "FROM_ENV",
        "GIT_REPOSITORY_OPEN_FROM_ENV",
        "Find and open the repository the way the git tools do, honoring `GIT_DIR` and friends.",
    ),
];

const REPOSITORY_STATE: &[M] = &[
    M::native("NONE", "GIT_REPOSITORY_STATE_NONE", "No operation in progress."),
    M::native("MERGE", "GIT_REPOSITORY_STATE_MERGE", "Merge in progress."),
    M::native("REVERT", "GIT_REPOSITORY_STATE_REVERT", "Revert in progress."),
    M::native(
        "REVERT_SEQUENCE",
        "GIT_REPOSITORY_STATE_REVERT_SEQUENCE",
        "Multi-commit revert in progress.",
    ),
    M::native("CHERRYPICK", "GIT_REPOSITORY_STATE_CHERRYPICK", "Cherry-pick in progress."),
    M::native(
        "CHERRYPICK_SEQUENCE",
        "GIT_REPOSITORY_STATE_CHERRYPICK_SEQUENCE",
        "Multi-commit cherry-pick in progress.",
    ),
    M::native("BISECT", "GIT_REPOSITORY_STATE_BISECT", "Bisect in progress."),
    M::native("REBASE", "GIT_REPOSITORY_STATE_REBASE", "Rebase in progress."),
    M::native(
        "REBASE_INTERACTIVE",
        "GIT_REPOSITORY_STATE_REBASE_INTERACTIVE",
        "Interactive rebase in progress.",
    ),
    M::native(
        "REBASE_MERGE",
        "GIT_REPOSITORY_STATE_REBASE_MERGE",
        "Merge-based rebase in progress.",
    ),
    M::native("APPLY_MAILBOX", "GIT_REPOSITORY_STATE_APPLY_MAILBOX", "`git am` in progress."),
    M::native(
        "APPLY_MAILBOX_OR_REBASE",
        "GIT_REPOSITORY_STATE_APPLY_MAILBOX_OR_REBASE",
        "`git am` or rebase in progress.",
    ),
];

const RESET_MODE: &[M] = &[
    M::native("SOFT", "GIT_RESET_SOFT", "Move HEAD to the commit."),
    M::native("MIXED", "GIT_RESET_MIXED", "SOFT, then reset the index to the commit."),
    M::native("HARD", "GIT_RESET_HARD", "MIXED, then discard working tree changes."),
];

const SORT_MODE: &[M] = &[
    M::native(
        "NONE",
        "GIT_SORT_NONE",
        "Reverse chronological order, as `git log` does. The default.",
    ),
    M::native(
        "TOPOLOGICAL",
        "GIT_SORT_TOPOLOGICAL",
        "No parent before all its children. Combine with TIME for `--date-order`.",
    ),
    M::native("TIME", "GIT_SORT_TIME", "By commit time. Combines with TOPOLOGICAL."),
    M::native("REVERSE", "GIT_SORT_REVERSE", "Reverse order. Combines with the others."),
];

const STASH_APPLY_PROGRESS: &[M] = &[
    M::native("NONE", "GIT_STASH_APPLY_PROGRESS_NONE", "Not started."),
    M::native("LOADING_STASH", "GIT_STASH_APPLY_PROGRESS_LOADING_STASH", "Loading the stash."),
    M::native(
        "ANALYZE_INDEX",
        "GIT_STASH_APPLY_PROGRESS_ANALYZE_INDEX",
        "Analyzing the stored index.",
    ),
    M::native(
        "ANALYZE_MODIFIED",
        "GIT_STASH_APPLY_PROGRESS_ANALYZE_MODIFIED",
        "Analyzing modified files.",
    ),
    M::native(
        "ANALYZE_UNTRACKED",
        "GIT_STASH_APPLY_PROGRESS_ANALYZE_UNTRACKED",
        "Analyzing untracked and ignored files.",
    ),
    M::native(
        "CHECKOUT_UNTRACKED",
        "GIT_STASH_APPLY_PROGRESS_CHECKOUT_UNTRACKED",
        "Writing untracked files.",
    ),
    M::native(
        "CHECKOUT_MODIFIED",
        "GIT_STASH_APPLY_PROGRESS_CHECKOUT_MODIFIED",
        "Writing modified files.",
    ),
    M::native("DONE", "GIT_STASH_APPLY_PROGRESS_DONE", "Applied."),
];

const SUBMODULE_IGNORE: &[M] = &[
    M::native(
        "UNSPECIFIED",
        "GIT_SUBMODULE_IGNORE_UNSPECIFIED",
        "Use the submodule's configuration.",
    ),
    M::native("NONE", "GIT_SUBMODULE_IGNORE_NONE", "Any change or untracked file makes it dirty."),
    M::native("UNTRACKED", "GIT_SUBMODULE_IGNORE_UNTRACKED", "Dirty if tracked files change."),
    M::native("DIRTY", "GIT_SUBMODULE_IGNORE_DIRTY", "Dirty only if HEAD moved."),
    M::native("ALL", "GIT_SUBMODULE_IGNORE_ALL", "Never dirty."),
];

const SUBMODULE_STATUS: &[M] = &[
    M::native("IN_HEAD", "GIT_SUBMODULE_STATUS_IN_HEAD", "Superproject HEAD has the submodule."),
    M::native("IN_INDEX", "GIT_SUBMODULE_STATUS_IN_INDEX", "Superproject index has the submodule."),
    M::native("IN_CONFIG", "GIT_SUBMODULE_STATUS_IN_CONFIG", "`.gitmodules` has the submodule."),
    M::native("IN_WD", "GIT_SUBMODULE_STATUS_IN_WD", "Superproject workdir has the submodule."),
    M::native("INDEX_ADDED", "GIT_SUBMODULE_STATUS_INDEX_ADDED", "In the index, not in HEAD."),
    M::native("INDEX_DELETED", "GIT_SUBMODULE_STATUS_INDEX_DELETED", "In HEAD, not in the index."),
    M::native(
        "INDEX_MODIFIED",
        "GIT_SUBMODULE_STATUS_INDEX_MODIFIED",
        "Index and HEAD disagree.",
    ),
    M::native(
        "WD_UNINITIALIZED",
        "GIT_SUBMODULE_STATUS_WD_UNINITIALIZED",
        "Workdir holds an empty repository.",
    ),
    M::native("WD_ADDED", "GIT_SUBMODULE_STATUS_WD_ADDED", "In the workdir, not in the index."),
    M::native("WD_DELETED", "GIT_SUBMODULE_STATUS_WD_DELETED", "In the index, not in the workdir."),
    M::native(
        "WD_MODIFIED",
        "GIT_SUBMODULE_STATUS_WD_MODIFIED",
        "Index and workdir HEAD disagree.",
    ),
    M::native(
        "WD_INDEX_MODIFIED",
        "GIT_SUBMODULE_STATUS_WD_INDEX_MODIFIED",
        "The submodule's own index is dirty.",
    ),
    M::native(
        "WD_WD_MODIFIED",
        "GIT_SUBMODULE_STATUS_WD_WD_MODIFIED",
        "The submodule's workdir has modified files.",
    ),
    M::native(
        "WD_UNTRACKED",
        "GIT_SUBMODULE_STATUS_WD_UNTRACKED",
        "The submodule's workdir has untracked files.",
    ),
];

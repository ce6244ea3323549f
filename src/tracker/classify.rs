use crate::models::{ActionInfo, Category};

const READ: ActionInfo = ActionInfo { category: Category::Read, glyph: "📖" };
const SEARCH: ActionInfo = ActionInfo { category: Category::Search, glyph: "🔍" };
const LIST: ActionInfo = ActionInfo { category: Category::List, glyph: "📂" };
const GLOB: ActionInfo = ActionInfo { category: Category::Glob, glyph: "🌐" };
const WRITE: ActionInfo = ActionInfo { category: Category::Write, glyph: "✍️" };
const EDIT: ActionInfo = ActionInfo { category: Category::Edit, glyph: "🛠️" };
const EXEC: ActionInfo = ActionInfo { category: Category::Exec, glyph: "💻" };
const FETCH: ActionInfo = ActionInfo { category: Category::Fetch, glyph: "🔗" };
const WEB: ActionInfo = ActionInfo { category: Category::Web, glyph: "🌍" };
const AGENT: ActionInfo = ActionInfo { category: Category::Agent, glyph: "🤖" };

/// Fallback for tool names missing from [`ACTION_TABLE`]
pub const OTHER: ActionInfo = ActionInfo { category: Category::Other, glyph: "❓" };

/// Tool name to action lookup. Names are matched exactly (case-sensitive); the
/// PascalCase entries cover hosts that use capitalized tool names.
pub const ACTION_TABLE: &[(&str, ActionInfo)] = &[
    ("read_file", READ),
    ("read_many_files", READ),
    ("Read", READ),
    ("search_file_content", SEARCH),
    ("grep", SEARCH),
    ("Grep", SEARCH),
    ("list_directory", LIST),
    ("ls", LIST),
    ("LS", LIST),
    ("glob", GLOB),
    ("Glob", GLOB),
    ("write_file", WRITE),
    ("Write", WRITE),
    ("replace", EDIT),
    ("edit", EDIT),
    ("Edit", EDIT),
    ("MultiEdit", EDIT),
    ("run_shell_command", EXEC),
    ("Bash", EXEC),
    ("web_fetch", FETCH),
    ("WebFetch", FETCH),
    ("google_web_search", WEB),
    ("web_search", WEB),
    ("WebSearch", WEB),
    ("delegate_to_agent", AGENT),
    ("codebase_investigator", AGENT),
    ("Task", AGENT),
];

/// Look up the category and glyph for a tool name
pub fn classify(tool_name: &str) -> ActionInfo {
    ACTION_TABLE.iter().find(|(name, _)| *name == tool_name).map(|(_, info)| *info).unwrap_or(OTHER)
}

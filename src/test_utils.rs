//! Shared map fixtures for tests. Maps parse via
//! [`crate::search::GridSnapshot::from_text`]: the last line is `y = 0` and
//! leading indentation is trimmed.

/// 3x3 interior, agent at (1, 1), single dirty cell at (3, 3), no interior
/// walls.
pub const SMALL_OPEN_MAP: &str = "
    #####
    #..*#
    #...#
    #@..#
    #####
";

/// Same layout as [`SMALL_OPEN_MAP`] but the agent's own cell is dirty.
pub const AGENT_ON_DIRT_MAP: &str = "
    #####
    #...#
    #...#
    #+..#
    #####
";

/// Dirty cells at (1, 3) and (5, 1); the agent at (3, 1) is two moves from
/// the nearer one.
pub const MULTI_DIRT_MAP: &str = "
    #######
    #*....#
    #.....#
    #..@.*#
    #######
";

/// An interior wall at (2, 2) forces the path around it.
pub const CORRIDOR_MAP: &str = "
    #####
    #.#*#
    #@..#
    #####
";

/// Single-row corridor; with heading RIGHT the only path to the dirt starts
/// with a reversal.
pub const REVERSAL_MAP: &str = "
    #####
    #*.@#
    #####
";

/// The dirty cell at (3, 3) is fully enclosed by walls; no path exists.
pub const ENCLOSED_DIRT_MAP: &str = "
    #######
    #@....#
    #.###.#
    #.#*#.#
    #.###.#
    #.....#
    #######
";

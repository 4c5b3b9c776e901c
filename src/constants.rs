//! Fixed gameplay values: cell metrics, speeds, scores, collision bands,
//! and the built-in board.

use glam::Vec2;

/// Product token that opens every maze document header (`"munch maze WxH"`).
pub const MAZE_HEADER_TOKEN: &str = "munch";

/// The size of one maze cell, in world units.
pub const CELL_SIZE: Vec2 = Vec2::new(20.0, 20.0);

/// Height of the reserved HUD band above the board, in world units.
pub const HUD_BAND: f32 = 100.0;

/// World position of the board's top-left cell. The vertical component
/// leaves room for the HUD band.
pub const BOARD_OFFSET: Vec2 = Vec2::new(0.0, HUD_BAND);

/// Vertical band of a door cell that actually blocks, as fractions of the
/// cell height. The door is a gate strip across the cell, not a full wall.
pub const DOOR_BAND: (f32, f32) = (0.25, 0.75);

/// Collision box of a pellet, as fractions of the cell extent.
pub const PELLET_BAND: (f32, f32) = (0.4, 0.5);

/// Collision box of an energizer, as fractions of the cell extent.
pub const ENERGIZER_BAND: (f32, f32) = (0.2, 0.75);

/// Player travel speed, in world units per second (5 cells/s).
pub const PLAYER_SPEED: f32 = 100.0;

/// Chaser travel speed, slightly below the player's.
pub const CHASER_SPEED: f32 = 94.0;

/// Longest slice of game time a single update step may cover, in seconds.
/// Larger frames are split into slices no coarser than this.
pub const MAX_STEP_SECS: f32 = 1.0 / 60.0;

/// Most game time one update call may advance; anything beyond is dropped
/// so a long stall cannot fast-forward the board.
pub const MAX_FRAME_SECS: f32 = 0.25;

/// Points for eating a single pellet.
pub const PELLET_SCORE: u32 = 10;

/// Points for eating an energizer.
pub const ENERGIZER_SCORE: u32 = 50;

/// Points for capturing a chaser during the vulnerability window.
pub const CHASER_SCORE: u32 = 200;

/// How long chasers stay capturable after an energizer, in seconds.
pub const VULNERABLE_SECS: f32 = 6.0;

/// Lives a fresh session starts with.
pub const STARTING_LIVES: u8 = 3;

/// The built-in level: a complete 28x31 maze document, header included.
///
/// The chaser house sits mid-board with a two-cell door (`o`) on top and
/// the player starts in the lower corridor. Exactly one of each start
/// marker (`0`-`4`) appears, which the parser enforces for every document.
pub const DEFAULT_BOARD: &str = "\
munch maze 28x31
############################
#************##************#
#*####*#####*##*#####*####*#
#+####*#####*##*#####*####+#
#*####*#####*##*#####*####*#
#**************************#
#*####*##*########*##*####*#
#*####*##*########*##*####*#
#******##****##****##******#
######*##### ## #####*######
######*##### ## #####*######
######*##          ##*######
######*## ###oo### ##*######
######*## #1 23 4# ##*######
######*## #      # ##*######
######*## ######## ##*######
######*##          ##*######
######*##### ## #####*######
######*##### ## #####*######
#******##****##****##******#
#************##************#
#*####*#####*##*#####*####*#
#*####*#####*##*#####*####*#
#+**##*******0 *******##**+#
###*##*##*########*##*##*###
###*##*##*########*##*##*###
#******##****##****##******#
#*##########*##*##########*#
#*##########*##*##########*#
#**************************#
############################
";

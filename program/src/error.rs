use pinocchio::program_error::ProgramError;

/// Custom error codes start where the original IDL numbered them.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum GameError {
    RoomFull = ERROR_CODE_OFFSET,
    NotEnoughPlayers,
    InvalidRoomState,
    AlreadyJoined,
    RoomExpired,
    RoomNotExpired,
    Unauthorized,
    InvalidMapSelection,
    PlayerNotInRoom,
    DuplicateScore,
    TooManyScores,
    ScoreOverflow,
    AlreadyInitialized,
    InvalidAddress,
    ParkTokenExists,
    ParkTokenMissing,
    MintMismatch,
    TokenOwnerMismatch,
}

impl GameError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            GameError::RoomFull => "Room is full.",
            GameError::NotEnoughPlayers => "Not enough players.",
            GameError::InvalidRoomState => "Invalid room state.",
            GameError::AlreadyJoined => "Player already joined this room.",
            GameError::RoomExpired => "Room has expired.",
            GameError::RoomNotExpired => "Room has not expired yet.",
            GameError::Unauthorized => "Signer is not allowed to perform this action.",
            GameError::InvalidMapSelection => "Map selection is empty or too long.",
            GameError::PlayerNotInRoom => "Scored player is not in this room.",
            GameError::DuplicateScore => "Player scored more than once.",
            GameError::TooManyScores => "More scores than players.",
            GameError::ScoreOverflow => "Score payout overflows.",
            GameError::AlreadyInitialized => "Account is already initialized.",
            GameError::InvalidAddress => "Account address does not match its seeds.",
            GameError::ParkTokenExists => "PARK token already created.",
            GameError::ParkTokenMissing => "PARK token not created yet.",
            GameError::MintMismatch => "Token account holds the wrong mint.",
            GameError::TokenOwnerMismatch => "Token account has the wrong owner.",
        }
    }
}

// map domain errors to a custom program error
pub fn to_program_error(err: GameError) -> ProgramError {
    pinocchio::msg!(err.message());
    ProgramError::Custom(err.code())
}

impl From<GameError> for ProgramError {
    fn from(err: GameError) -> Self {
        to_program_error(err)
    }
}

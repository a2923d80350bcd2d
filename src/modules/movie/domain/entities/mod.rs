pub mod actor_detail;
pub mod credits;
pub mod movie;

pub use actor_detail::{ActorDetail, NOT_AVAILABLE};
pub use credits::{CastMember, CrewMember};
pub use movie::{Movie, MAX_CREDITS};

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DatePlan, Interest, InterestCategory, MatchedVenue, Occasion, ParticipantRole, Session,
    SessionStatus, Swipe, SwipeDirection, Venue, VenueType, Walkability,
};
pub use requests::{
    CreateSessionRequest, GeneratePlansRequest, JoinSessionRequest, MatchVenuesRequest,
    SubmitInterestsRequest, SwipeRequest,
};
pub use responses::{
    ErrorResponse, GeneratePlansResponse, HealthResponse, InterestGroup, InterestsResponse,
    MatchVenuesResponse, SwipeResponse, VenuesResponse,
};

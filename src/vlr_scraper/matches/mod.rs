mod detail;
mod list;
mod live;
mod streams;

pub(crate) use detail::{agent_from_icon, get_match_details};
pub(crate) use list::{
    get_completed_matches, get_matches_by_event, get_matches_by_region, get_upcoming_matches,
};
pub(crate) use live::get_live_matches;
pub(crate) use streams::get_match_streams;

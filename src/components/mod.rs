mod affiliate_link;
mod issue_card;
mod nav_bar;
mod video_link;

pub use affiliate_link::AffiliateLink;
pub use issue_card::IssueCard;
pub use nav_bar::NavBar;
pub use video_link::VideoLink;

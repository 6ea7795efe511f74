//! Profile summary card: avatar, name and up to four stat pills.

use crate::config::{Config, ProfileLayoutConfig};
use crate::error::{ErrorCard, FetchError, ProfileError};
use crate::render::{render_error_svg, render_profile_svg};
use crate::theme::{Theme, resolve_theme};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

const FOLLOWERS_ICON: &str = "M3.625,9.5A2.417,2.417,0,1,0,1.208,7.084,2.419,2.419,0,0,0,3.625,9.5Zm16.919,0a2.417,2.417,0,1,0-2.417-2.417A2.419,2.419,0,0,0,20.544,9.5Zm1.208,1.208H19.336a2.41,2.41,0,0,0-1.7.7,5.524,5.524,0,0,1,2.836,4.132h2.493a1.207,1.207,0,0,0,1.208-1.208V13.126A2.419,2.419,0,0,0,21.753,10.709Zm-9.668,0a4.23,4.23,0,1,0-4.23-4.23A4.228,4.228,0,0,0,12.085,10.709Zm2.9,1.208h-.313a5.84,5.84,0,0,1-5.174,0H9.185a4.352,4.352,0,0,0-4.351,4.351v1.088a1.813,1.813,0,0,0,1.813,1.813H17.523a1.813,1.813,0,0,0,1.813-1.813V16.269A4.352,4.352,0,0,0,14.985,11.918Zm-8.448-.506a2.41,2.41,0,0,0-1.7-.7H2.417A2.419,2.419,0,0,0,0,13.126v1.208a1.207,1.207,0,0,0,1.208,1.208H3.7A5.538,5.538,0,0,1,6.537,11.412Z";

const REPOSITORIES_ICON: &str = "M7.106,3A2.106,2.106,0,0,0,5,5.106V17.74a.7.7,0,0,0,.207.5,2.026,2.026,0,0,0,1.9,1.608h.7v-1.4h-.7a.7.7,0,0,1,0-1.4H17.634a1.4,1.4,0,0,0,1.4-1.4V4.4a1.4,1.4,0,0,0-1.4-1.4Zm.7,2.106h.7a.7.7,0,0,1,.7.7v.7a.7.7,0,0,1-.7.7h-.7a.7.7,0,0,1-.7-.7v-.7A.7.7,0,0,1,7.808,5.106Zm0,3.51h.7a.7.7,0,0,1,.7.7v.7a.7.7,0,0,1-.7.7h-.7a.7.7,0,0,1-.7-.7v-.7A.7.7,0,0,1,7.808,8.615Zm0,3.51h.7a.7.7,0,0,1,.7.7v.7a.7.7,0,0,1-.7.7h-.7a.7.7,0,0,1-.7-.7v-.7A.7.7,0,0,1,7.808,12.125Zm1.4,6.317v3.51l2.106-1.4,2.106,1.4v-3.51Zm5.615,0v1.4h3.51a.7.7,0,0,0,0-1.4Z";

const STARS_ICON: &str = "M9.6.608,7.369,5.131l-4.992.728a1.094,1.094,0,0,0-.6,1.865l3.611,3.519L4.53,16.215a1.093,1.093,0,0,0,1.585,1.151l4.465-2.347,4.465,2.347a1.094,1.094,0,0,0,1.585-1.151l-.854-4.971,3.611-3.519a1.094,1.094,0,0,0-.6-1.865l-4.992-.728L11.561.608A1.094,1.094,0,0,0,9.6.608Z";

const CONTRIBUTIONS_ICON: &str = r##"<g transform="translate(-71 9)"><path d="M0,0H20.592V20.592H0Z" fill="none"/><path d="M12.438,14.87v5.148H10.722V14.87H8.148l3.432-4.29,3.432,4.29Zm1.716,1.716h2.574V14.012h-.686L11.58,8.435,6.987,14.012H6a1.287,1.287,0,0,0,0,2.574h3V18.3H6a3,3,0,0,1-3-3V4.574A2.574,2.574,0,0,1,5.574,2H17.586a.858.858,0,0,1,.858.858V17.444a.858.858,0,0,1-.858.858H14.154ZM6.432,4.574V6.29H8.148V4.574Zm0,2.574V8.864H8.148V7.148Z" transform="translate(-0.426 -0.284)" fill="#00F14F"/></g>"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Followers,
    Repositories,
    Stars,
    Contributions,
}

/// How a pill draws its icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatIcon {
    /// A path filled with the accent color, shifted down by `dy`.
    Path { d: &'static str, dy: f32 },
    /// Pre-positioned markup emitted as is.
    Markup(&'static str),
}

impl StatKind {
    /// Case-insensitive; `commits` is accepted as an alias of `contributions`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "followers" => Some(Self::Followers),
            "repositories" => Some(Self::Repositories),
            "stars" => Some(Self::Stars),
            "contributions" | "commits" => Some(Self::Contributions),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Repositories => "repositories",
            Self::Stars => "stars",
            Self::Contributions => "contributions",
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Self::Followers => "#CAF0FF",
            Self::Repositories => "#FFCEE4",
            Self::Stars => "#FFEFCD",
            Self::Contributions => "#C5FFD9",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Self::Followers => "#00C6FF",
            Self::Repositories => "#FF0774",
            Self::Stars => "#FFA100",
            Self::Contributions => "#00F14F",
        }
    }

    pub fn text_x(self) -> f32 {
        match self {
            Self::Followers => -43.0,
            _ => -47.0,
        }
    }

    pub fn icon(self) -> StatIcon {
        match self {
            Self::Followers => StatIcon::Path { d: FOLLOWERS_ICON, dy: 8.0 },
            Self::Repositories => StatIcon::Path { d: REPOSITORIES_ICON, dy: 8.0 },
            Self::Stars => StatIcon::Path { d: STARS_ICON, dy: 10.0 },
            Self::Contributions => StatIcon::Markup(CONTRIBUTIONS_ICON),
        }
    }

    pub fn count(self, stats: &ProfileStats) -> u64 {
        match self {
            Self::Followers => stats.followers,
            Self::Repositories => stats.repositories,
            Self::Stars => stats.stars,
            Self::Contributions => stats.contributions,
        }
    }
}

/// Aggregate account numbers as returned by the remote source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    pub repositories: u64,
    /// Stargazers summed over the account's repositories.
    pub stars: u64,
    pub contributions: u64,
}

/// Remote account data. Implementations decide transport and auth.
pub trait ProfileSource {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<ProfileStats, FetchError>> + Send;

    fn fetch_avatar(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatPill {
    pub kind: StatKind,
    pub x: f32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub display_name: String,
    pub login: String,
    pub avatar_base64: String,
    pub pills: Vec<StatPill>,
}

/// Turns raw avatar bytes into the text embedded in the data URI.
pub fn encode_asset(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Validates the comma-joined stat selection without touching the network.
pub fn parse_stats(raw: &str, max: usize) -> Result<Vec<StatKind>, ProfileError> {
    if raw.trim().is_empty() {
        return Err(ProfileError::MissingStats);
    }
    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() > max {
        return Err(ProfileError::TooManyStats {
            count: tokens.len(),
            max,
        });
    }
    tokens
        .into_iter()
        .map(|token| {
            StatKind::from_token(token).ok_or_else(|| ProfileError::UnknownStat(token.to_string()))
        })
        .collect()
}

/// Pills are right-aligned: the last selected stat sits at the anchor, earlier ones
/// step left by the pill pitch.
pub fn layout_pills(kinds: &[StatKind], stats: &ProfileStats, config: &ProfileLayoutConfig) -> Vec<StatPill> {
    let n = kinds.len();
    kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| StatPill {
            kind: *kind,
            x: (n - 1 - index) as f32 * -config.pill_pitch,
            count: kind.count(stats),
        })
        .collect()
}

pub async fn build_profile_card<S: ProfileSource>(
    username: &str,
    data: &str,
    source: &S,
    config: &ProfileLayoutConfig,
) -> Result<ProfileCard, ProfileError> {
    let kinds = parse_stats(data, config.max_stats)?;
    let stats = source.fetch_profile(username).await?;
    let avatar = source.fetch_avatar(&stats.avatar_url).await?;
    tracing::debug!(
        login = %stats.login,
        stats = kinds.len(),
        avatar_bytes = avatar.len(),
        "fetched profile"
    );

    let pills = layout_pills(&kinds, &stats, config);
    let display_name = stats
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| stats.login.clone());
    Ok(ProfileCard {
        display_name,
        login: stats.login,
        avatar_base64: encode_asset(&avatar),
        pills,
    })
}

/// Renders the profile card. Every failure comes back as an error card, never as `Err`.
pub async fn render_profile<S: ProfileSource>(
    username: &str,
    data: &str,
    theme: Option<&str>,
    source: &S,
    config: &Config,
) -> String {
    let theme: Theme = match theme {
        Some(_) => resolve_theme(theme),
        None => config.theme.clone(),
    };
    let layout = &config.layout.profile;
    match build_profile_card(username, data, source, layout).await {
        Ok(card) => render_profile_svg(&card, &theme, layout),
        Err(err) => {
            tracing::warn!(user = username, error = %err, "profile render failed");
            render_error_svg(&ErrorCard::new("Profile", &err), &theme, layout)
        }
    }
}

/// Error card for a render whose source could not be set up. An invalid stat
/// selection still gets its own message.
pub fn render_unreachable_profile(username: &str, data: &str, error: FetchError, config: &Config) -> String {
    let layout = &config.layout.profile;
    let err = match parse_stats(data, layout.max_stats) {
        Err(invalid) => invalid,
        Ok(_) => ProfileError::Fetch(error),
    };
    tracing::warn!(user = username, error = %err, "profile render failed");
    render_error_svg(&ErrorCard::new("Profile", &err), &config.theme, layout)
}

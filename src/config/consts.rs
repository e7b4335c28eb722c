// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.basketball-bund.net";
pub const TEAMS_PATH: &str = "/index.jsp";
pub const FEED_PATH: &str = "/servlet/KalenderDienst";
pub const USER_AGENT: &str = "bb_calendar/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Team dropdown on the schedule page (Action=101)
pub const TEAMS_ACTION: &str = "101";
pub const TEAM_SELECT_NAME: &str = "cbMannschaftenFilter";
pub const NO_SELECTION_VALUE: &str = "-1"; // "- alle Mannschaften -"
pub const SAMPLE_OPTIONS: usize = 10;

// Feed query
pub const FEED_TYPE: &str = "2";
pub const ALL_ROUNDS: &str = "-1"; // alle Spieltage

// Synthesized UIDs
pub const UID_DOMAIN: &str = "basketball-bund.net";

// Calendar header
pub const CAL_NAME: &str = "Basketball Spiele";
pub const CAL_TIMEZONE: &str = "Europe/Berlin";
pub const CAL_PRODID: &str = "-//David//BB Kalender Merge//DE";
pub const CAL_TTL: &str = "PT168H"; // 7 days
pub const CAL_DESC_PREFIX: &str = "Automatisch generiert. Letztes Update: ";

// Export
pub const DEFAULT_OUT_FILE: &str = "calendar.ics";

/// Built-in (team name, league id) list used when no config is given.
pub const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("TSV Grombühl 2", "51127"),
    ("TSV Grombühl", "52205"),
    ("TSV Grombühl AK", "51052"),
    ("TG Veitshöchheim", "49758"),
];

//! Experience and level progression.
//!
//! Experience is earned by unlocking achievements (one point of experience
//! per achievement point). Level is derived from experience on read and never
//! stored.

/// Experience required to advance one level.
pub const XP_PER_LEVEL: i64 = 1000;

/// Level reached with `experience` points. Every user starts at level 1.
pub fn level_for_experience(experience: i64) -> i64 {
    1 + experience.max(0) / XP_PER_LEVEL
}

/// Experience still missing to reach the next level.
pub fn experience_to_next_level(experience: i64) -> i64 {
    XP_PER_LEVEL - experience.max(0) % XP_PER_LEVEL
}

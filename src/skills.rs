use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillType {
    Aim,
    Movement,
    Strategy,
    Teamwork,
    Reflexes,
}

impl SkillType {
    pub fn all() -> [SkillType; 5] {
        [
            SkillType::Aim,
            SkillType::Movement,
            SkillType::Strategy,
            SkillType::Teamwork,
            SkillType::Reflexes,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            SkillType::Aim => "AIM",
            SkillType::Movement => "MOV",
            SkillType::Strategy => "STR",
            SkillType::Teamwork => "TMW",
            SkillType::Reflexes => "REF",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SkillType::Aim => 0,
            SkillType::Movement => 1,
            SkillType::Strategy => 2,
            SkillType::Teamwork => 3,
            SkillType::Reflexes => 4,
        }
    }
}

/// The five skill levels of a player, indexed by [`SkillType`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillSet {
    values: [u32; 5],
}

impl SkillSet {
    pub fn from_values(values: [u32; 5]) -> Self {
        Self { values }
    }

    pub fn get(&self, skill: SkillType) -> u32 {
        self.values[skill.index()]
    }

    pub fn set(&mut self, skill: SkillType, value: u32) {
        self.values[skill.index()] = value;
    }

    /// Truncated integer mean of the five skill levels.
    pub fn average(&self) -> u32 {
        self.values.iter().sum::<u32>() / self.values.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut skills = SkillSet::from_values([50; 5]);
        skills.set(SkillType::Aim, 72);
        assert_eq!(skills.get(SkillType::Aim), 72);
        assert_eq!(skills.get(SkillType::Movement), 50);
    }

    #[test]
    fn test_average_truncates() {
        let skills = SkillSet::from_values([50, 50, 50, 50, 52]);
        // 252 / 5 = 50.4, truncated to 50
        assert_eq!(skills.average(), 50);
    }

    #[test]
    fn test_average_of_uniform_values() {
        let skills = SkillSet::from_values([63; 5]);
        assert_eq!(skills.average(), 63);
    }

    #[test]
    fn test_skill_type_indices_are_distinct() {
        let mut seen = [false; 5];
        for skill in SkillType::all() {
            assert!(!seen[skill.index()]);
            seen[skill.index()] = true;
        }
    }

    #[test]
    fn test_abbrevs() {
        assert_eq!(SkillType::Aim.abbrev(), "AIM");
        assert_eq!(SkillType::Movement.abbrev(), "MOV");
        assert_eq!(SkillType::Strategy.abbrev(), "STR");
        assert_eq!(SkillType::Teamwork.abbrev(), "TMW");
        assert_eq!(SkillType::Reflexes.abbrev(), "REF");
    }
}

use darkfort::GameEvent;
use ratatui::style::Color;

/// Short-lived panel highlight triggered by a game event.
#[derive(Debug, Clone)]
pub struct VisualEffect {
    pub effect_type: EffectType,
    pub lifetime: f64,
    pub max_lifetime: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectType {
    /// The player lost hp. Flashes the character panel.
    PlayerHit,
    /// A monster lost hp. Flashes the room panel.
    MonsterHit,
    LevelUp,
    /// A fresh run began. Flashes the room panel.
    NewRun,
}

impl EffectType {
    pub fn from_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayerHit => Some(EffectType::PlayerHit),
            GameEvent::MonsterHit => Some(EffectType::MonsterHit),
            GameEvent::LevelUp => Some(EffectType::LevelUp),
            GameEvent::Start => Some(EffectType::NewRun),
            _ => None,
        }
    }
}

impl VisualEffect {
    pub fn new(effect_type: EffectType, max_lifetime: f64) -> Self {
        Self {
            effect_type,
            lifetime: 0.0,
            max_lifetime,
        }
    }

    /// Advance by `delta` seconds. Returns false once expired.
    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.lifetime <= self.max_lifetime
    }

    pub fn border_color(&self) -> Color {
        match self.effect_type {
            EffectType::PlayerHit => Color::Red,
            EffectType::MonsterHit => Color::LightYellow,
            EffectType::LevelUp => Color::LightGreen,
            EffectType::NewRun => Color::LightBlue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_expires() {
        let mut effect = VisualEffect::new(EffectType::PlayerHit, 0.3);
        assert!(effect.is_active());
        assert!(effect.update(0.2));
        assert!(!effect.update(0.2));
    }

    #[test]
    fn test_only_hits_levels_and_starts_flash() {
        assert_eq!(
            EffectType::from_event(GameEvent::PlayerHit),
            Some(EffectType::PlayerHit)
        );
        assert_eq!(EffectType::from_event(GameEvent::Start), Some(EffectType::NewRun));
        assert_eq!(EffectType::from_event(GameEvent::Buy), None);
    }
}

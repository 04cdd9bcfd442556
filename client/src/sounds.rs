//! Sound asset paths

use rand::Rng;

/// Number of interchangeable attack sound variants
pub const ATTACK_VARIANTS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// One of the attack variants, 1-based
    Attack(u8),
    RoundStart,
    WinRound,
    LoseRound,
    WinGame,
    LoseGame,
}

/// Resolves sounds to asset paths under one directory
#[derive(Debug, Clone)]
pub struct SoundBank {
    dir: String,
}

impl SoundBank {
    pub fn new(dir: impl Into<String>) -> Self {
        let dir: String = dir.into();
        Self {
            dir: dir.trim_end_matches('/').to_string(),
        }
    }

    /// Path of a sound effect
    pub fn path(&self, sound: Sound) -> String {
        let file = match sound {
            Sound::Attack(variant) => {
                let variant = variant.clamp(1, ATTACK_VARIANTS);
                return format!("{}/attack{}.wav", self.dir, variant);
            }
            Sound::RoundStart => "roundStart.mp3",
            Sound::WinRound => "winRound.mp3",
            Sound::LoseRound => "loseRound.mp3",
            Sound::WinGame => "winGame.mp3",
            Sound::LoseGame => "youLost.mp3",
        };
        format!("{}/{}", self.dir, file)
    }

    /// Path of a creature's cry
    pub fn cry_path(&self, name: &str) -> String {
        format!("{}/pokemon-cries/{}.mp3", self.dir, name.to_lowercase())
    }

    /// A random attack variant
    pub fn random_attack<R: Rng + ?Sized>(rng: &mut R) -> Sound {
        Sound::Attack(rng.gen_range(1..=ATTACK_VARIANTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_paths() {
        let bank = SoundBank::new("sounds/");
        assert_eq!(bank.path(Sound::RoundStart), "sounds/roundStart.mp3");
        assert_eq!(bank.path(Sound::WinRound), "sounds/winRound.mp3");
        assert_eq!(bank.path(Sound::LoseRound), "sounds/loseRound.mp3");
        assert_eq!(bank.path(Sound::WinGame), "sounds/winGame.mp3");
        assert_eq!(bank.path(Sound::LoseGame), "sounds/youLost.mp3");
        assert_eq!(bank.path(Sound::Attack(3)), "sounds/attack3.wav");
        assert_eq!(bank.path(Sound::Attack(0)), "sounds/attack1.wav");
    }

    #[test]
    fn test_cry_path() {
        let bank = SoundBank::new("assets");
        assert_eq!(bank.cry_path("Pikachu"), "assets/pokemon-cries/pikachu.mp3");
    }

    #[test]
    fn test_random_attack_variants() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            match SoundBank::random_attack(&mut rng) {
                Sound::Attack(n) => assert!((1..=ATTACK_VARIANTS).contains(&n)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}

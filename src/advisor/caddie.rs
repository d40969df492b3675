use crate::domain::{Club, HoleData, Position};
use crate::error::Result;
use crate::geometry::{Scale, distance, to_yards};

use super::{ClubAdvice, Conditions, NegativeDistancePolicy, strategy};

/// Everything the caddie has to say about the next shot
#[derive(Debug, Clone, PartialEq)]
pub struct Advice<'a> {
    /// Straight-line yards to the pin
    pub distance_yards: i32,
    /// Yards the shot plays after wind, elevation and lie
    pub plays_like_yards: i32,
    pub clubs: ClubAdvice<'a>,
    pub strategy: String,
}

/// Combines the distance, adjustment, club and strategy steps for a
/// given map scale and negative-distance policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Caddie {
    scale: Scale,
    policy: NegativeDistancePolicy,
}

impl Caddie {
    pub fn new(scale: Scale, policy: NegativeDistancePolicy) -> Self {
        Self { scale, policy }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Yards from `position` to the hole's pin
    pub fn distance_to_pin(&self, hole: &HoleData, position: Position) -> i32 {
        to_yards(distance(position, hole.pin_position), self.scale)
    }

    /// Advise on a shot from `position` towards the pin of `hole`
    ///
    /// Clubs are ranked against the plays-like distance. The strategy text
    /// uses the measured distance, since it describes the shot the player
    /// is looking at.
    pub fn advise<'a>(
        &self,
        hole: &HoleData,
        position: Position,
        clubs: &'a [Club],
        conditions: &Conditions,
    ) -> Result<Advice<'a>> {
        let distance_yards = self.distance_to_pin(hole, position);
        let plays_like_yards = self
            .policy
            .apply(conditions.plays_like(distance_yards as f64))?;

        tracing::debug!(
            hole = hole.number,
            distance_yards,
            plays_like_yards,
            wind = %conditions.wind,
            lie = %conditions.lie,
            "computed shot distance"
        );

        let clubs = ClubAdvice::for_distance(clubs, plays_like_yards as f64);
        let strategy = strategy(
            distance_yards as f64,
            conditions.wind_mph,
            conditions.wind,
            &hole.hazard_cues(),
        );

        Ok(Advice {
            distance_yards,
            plays_like_yards,
            clubs,
            strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{Lie, WindDirection};
    use crate::domain::CourseData;
    use crate::error::CaddieError;

    fn caddie(policy: NegativeDistancePolicy) -> Caddie {
        Caddie::new(Scale::new(3.0).unwrap(), policy)
    }

    #[test]
    fn test_distance_to_pin_from_tee() {
        let course = CourseData::default_layout();
        let hole = course.hole(1).unwrap();
        // sqrt(70^2 + 60^2) = 92.195... map units * 3
        assert_eq!(
            caddie(NegativeDistancePolicy::Allow).distance_to_pin(hole, hole.tee_position),
            277
        );
        assert_eq!(
            caddie(NegativeDistancePolicy::Allow).distance_to_pin(hole, hole.pin_position),
            0
        );
    }

    #[test]
    fn test_advise_approach() {
        let course = CourseData::default_layout();
        let hole = course.hole(2).unwrap();
        let bag = Club::default_bag();
        // 30 map units short of the pin -> 90 yards
        let position = Position::new(80.0, 55.0);
        let conditions = Conditions::default()
            .with_wind(12.0, WindDirection::Headwind)
            .with_elevation(5.0);

        let advice = caddie(NegativeDistancePolicy::Allow)
            .advise(hole, position, &bag, &conditions)
            .unwrap();

        assert_eq!(advice.distance_yards, 90);
        assert_eq!(advice.plays_like_yards, 90 + 10 + 12);
        assert_eq!(advice.clubs.recommended.unwrap().name, "PW");
        assert_eq!(advice.clubs.alternatives.len(), 2);
        assert_eq!(
            advice.strategy,
            "Focus on distance control for this approach shot. \
             Club up to counter the headwind. \
             Avoid the water hazard by aiming away from it. \
             Be cautious of the bunkers protecting the green."
        );
    }

    #[test]
    fn test_advise_from_bunker_plays_longer() {
        let course = CourseData::default_layout();
        let hole = course.hole(3).unwrap();
        let bag = Club::default_bag();
        let position = Position::new(80.0, 55.0);
        let conditions = Conditions::default().with_lie(Lie::Sand);

        let advice = caddie(NegativeDistancePolicy::Allow)
            .advise(hole, position, &bag, &conditions)
            .unwrap();

        assert_eq!(advice.plays_like_yards, 120);
        assert_eq!(advice.clubs.recommended.unwrap().name, "PW");
    }

    #[test]
    fn test_negative_distance_policies() {
        let course = CourseData::default_layout();
        let hole = course.hole(1).unwrap();
        let bag = Club::default_bag();
        // 2 map units out, 6 yards, into a 20 mph tailwind downhill
        let position = Position::new(80.0, 27.0);
        let conditions = Conditions::default()
            .with_wind(20.0, WindDirection::Tailwind)
            .with_elevation(-3.0);

        let allowed = caddie(NegativeDistancePolicy::Allow)
            .advise(hole, position, &bag, &conditions)
            .unwrap();
        assert_eq!(allowed.plays_like_yards, 6 - 6 - 20);

        let clamped = caddie(NegativeDistancePolicy::Clamp)
            .advise(hole, position, &bag, &conditions)
            .unwrap();
        assert_eq!(clamped.plays_like_yards, 0);
        assert_eq!(clamped.clubs.recommended.unwrap().name, "LW");

        let rejected =
            caddie(NegativeDistancePolicy::Reject).advise(hole, position, &bag, &conditions);
        assert!(matches!(rejected, Err(CaddieError::NegativeDistance(-20))));
    }

    #[test]
    fn test_advise_with_empty_bag() {
        let course = CourseData::default_layout();
        let hole = course.hole(1).unwrap();
        let advice = Caddie::default()
            .advise(hole, hole.tee_position, &[], &Conditions::default())
            .unwrap();
        assert!(advice.clubs.recommended.is_none());
        assert!(!advice.strategy.is_empty());
    }
}

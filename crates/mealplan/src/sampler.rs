use chrono::NaiveDate;
use nutriplan_shared::recipe::MealType;
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::VariantArray;

use crate::{GenerateError, Macro, MealPools, PoolEntry};

pub const DEFAULT_ATTEMPT_BUDGET: u32 = 60;

const CALORIE_LOWER_RATIO: f64 = 0.95;
const CALORIE_UPPER_RATIO: f64 = 1.05;

/// Daily calorie and protein goals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Targets {
    pub calories: u32,
    pub protein: u32,
}

impl Targets {
    pub fn new(calories: u32, protein: u32) -> Self {
        Self { calories, protein }
    }

    /// Accepted kcal range, both ends included.
    pub fn calorie_window(&self) -> (f64, f64) {
        let calories = f64::from(self.calories);
        (calories * CALORIE_LOWER_RATIO, calories * CALORIE_UPPER_RATIO)
    }

    /// Calories within ±5 % and protein at or above the floor. Fat, carbs and
    /// fiber never count.
    pub fn is_within(&self, total: &Macro) -> bool {
        let (low, high) = self.calorie_window();
        total.kcal >= low && total.kcal <= high && total.protein >= f64::from(self.protein)
    }
}

/// Source of pool indexes for the sampler.
pub trait Picker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform picker backed by any `rand` generator.
pub struct RandomPicker<R>(R);

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RandomPicker<StdRng> {
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// The accepted combination for one day, one entry per meal type in
/// breakfast, lunch, dinner, snack order.
#[derive(Clone, Debug)]
pub struct DailySelection<'a> {
    pub date: NaiveDate,
    pub meals: Vec<(MealType, &'a PoolEntry)>,
    pub totals: Macro,
    pub attempts: u32,
}

pub struct DailySampler<'a> {
    pools: &'a MealPools,
    targets: Targets,
    attempt_budget: u32,
}

impl<'a> DailySampler<'a> {
    /// Fails with `EmptyMealPool` when any meal type has nothing to draw from.
    pub fn new(
        pools: &'a MealPools,
        targets: Targets,
        attempt_budget: u32,
    ) -> Result<Self, GenerateError> {
        pools.ensure_complete()?;

        Ok(Self {
            pools,
            targets,
            attempt_budget,
        })
    }

    /// Draws one recipe per meal type until the day's totals hit the targets
    /// or the attempt budget runs out.
    pub fn sample(
        &self,
        date: NaiveDate,
        picker: &mut impl Picker,
    ) -> Result<DailySelection<'a>, GenerateError> {
        for attempt in 1..=self.attempt_budget {
            let meals = MealType::VARIANTS
                .iter()
                .map(|meal_type| {
                    let pool = self.pools.get(*meal_type);
                    (*meal_type, &pool[picker.pick(pool.len())])
                })
                .collect::<Vec<_>>();

            let totals = meals.iter().map(|(_, entry)| entry.macros).sum::<Macro>();

            if self.targets.is_within(&totals) {
                tracing::debug!(
                    %date,
                    attempt,
                    kcal = totals.kcal,
                    protein = totals.protein,
                    "day accepted"
                );

                return Ok(DailySelection {
                    date,
                    meals,
                    totals,
                    attempts: attempt,
                });
            }
        }

        tracing::debug!(%date, budget = self.attempt_budget, "attempt budget exhausted");

        Err(GenerateError::DayInfeasible(date))
    }
}

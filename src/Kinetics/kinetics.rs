use crate::Kinetics::kinetics_api::KineticsCalculator;
use crate::Kinetics::reaction_errors::ReactionError;
use crate::Utils::constants::R;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_t0() -> f64 {
    1.0
}

fn check_domain(
    t: f64,
    p: Option<f64>,
    t_range: (Option<f64>, Option<f64>),
    p_range: (Option<f64>, Option<f64>),
) -> Result<(), ReactionError> {
    if !(t.is_finite() && t > 0.0) {
        return Err(ReactionError::InvalidArgument(format!(
            "temperature must be positive, got {}",
            t
        )));
    }
    let (tmin, tmax) = t_range;
    if tmin.is_some_and(|tmin| t < tmin) || tmax.is_some_and(|tmax| t > tmax) {
        return Err(ReactionError::MissingData(format!(
            "kinetics not valid at T = {} K (range {:?} - {:?})",
            t, tmin, tmax
        )));
    }
    if let Some(p) = p {
        let (pmin, pmax) = p_range;
        if pmin.is_some_and(|pmin| p < pmin) || pmax.is_some_and(|pmax| p > pmax) {
            return Err(ReactionError::MissingData(format!(
                "kinetics not valid at P = {} Pa (range {:?} - {:?})",
                p, pmin, pmax
            )));
        }
    }
    Ok(())
}

/////////////////////////ARRHENIUS///////////////////////////////////////////////////////////////
/// Modified Arrhenius expression k = A (T/T0)^n exp(-Ea/RT), SI units (Ea in J/mol)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrhenius {
    pub a: f64,
    #[serde(default)]
    pub n: f64,
    #[serde(default)]
    pub ea: f64,
    #[serde(default = "default_t0")]
    pub t0: f64,
    #[serde(default)]
    pub tmin: Option<f64>,
    #[serde(default)]
    pub tmax: Option<f64>,
    #[serde(default)]
    pub comment: String,
}

impl Arrhenius {
    pub fn new(a: f64, n: f64, ea: f64) -> Self {
        Self {
            a,
            n,
            ea,
            t0: 1.0,
            tmin: None,
            tmax: None,
            comment: String::new(),
        }
    }
    pub fn with_range(mut self, tmin: f64, tmax: f64) -> Self {
        self.tmin = Some(tmin);
        self.tmax = Some(tmax);
        self
    }
    /// value without domain checks
    fn k(&self, t: f64) -> f64 {
        self.a * (t / self.t0).powf(self.n) * f64::exp(-self.ea / (R * t))
    }
    /// symbolic rate coefficient as a function of the variable "T"
    pub fn rate_expr(&self) -> Expr {
        let t = Expr::Var("T".to_owned());
        let a = Expr::Const(self.a);
        let n = Expr::Const(self.n);
        let k0 = a * (t.clone() / Expr::Const(self.t0)).pow(n);
        let k = k0 * (Expr::Const(-self.ea) / (Expr::Const(R) * t)).exp();
        k.symplify()
    }
}

impl KineticsCalculator for Arrhenius {
    fn get_rate_coefficient(&self, t: f64, _p: f64) -> Result<f64, ReactionError> {
        check_domain(t, None, (self.tmin, self.tmax), (None, None))?;
        Ok(self.k(t))
    }
    fn is_pressure_dependent(&self) -> bool {
        false
    }
    fn change_rate(&mut self, factor: f64) {
        self.a *= factor;
    }
    fn comment(&self) -> &str {
        &self.comment
    }
}

/////////////////////////////THIRD-BODY KINETICS////////////////////////////////
/// k = k0(T) [M], [M] = P/(RT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdBody {
    pub arrhenius_low: Arrhenius,
    #[serde(default)]
    pub efficiencies: HashMap<String, f64>,
    #[serde(default)]
    pub tmin: Option<f64>,
    #[serde(default)]
    pub tmax: Option<f64>,
    #[serde(default)]
    pub pmin: Option<f64>,
    #[serde(default)]
    pub pmax: Option<f64>,
    #[serde(default)]
    pub comment: String,
}

impl ThirdBody {
    pub fn new(arrhenius_low: Arrhenius) -> Self {
        Self {
            arrhenius_low,
            efficiencies: HashMap::new(),
            tmin: None,
            tmax: None,
            pmin: None,
            pmax: None,
            comment: String::new(),
        }
    }
}

impl KineticsCalculator for ThirdBody {
    fn get_rate_coefficient(&self, t: f64, p: f64) -> Result<f64, ReactionError> {
        check_domain(t, Some(p), (self.tmin, self.tmax), (self.pmin, self.pmax))?;
        let c_m = p / (R * t);
        Ok(self.arrhenius_low.k(t) * c_m)
    }
    fn is_pressure_dependent(&self) -> bool {
        true
    }
    fn change_rate(&mut self, factor: f64) {
        self.arrhenius_low.change_rate(factor);
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn efficiencies(&self) -> Option<&HashMap<String, f64>> {
        Some(&self.efficiencies)
    }
}

/////////////////////////FALLOFF KINETICS///////////////////////////////////////////////////////////////
/// reduced pressure Pr = k0 [M] / k∞ together with k∞
fn reduced_pressure(high: &Arrhenius, low: &Arrhenius, t: f64, p: f64) -> (f64, f64) {
    let k_inf = high.k(t);
    let k0 = low.k(t);
    let c_m = p / (R * t);
    (k0 * c_m / k_inf, k_inf)
}

/// Lindemann falloff: k = k∞ Pr/(1 + Pr)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lindemann {
    pub arrhenius_high: Arrhenius,
    pub arrhenius_low: Arrhenius,
    #[serde(default)]
    pub efficiencies: HashMap<String, f64>,
    #[serde(default)]
    pub tmin: Option<f64>,
    #[serde(default)]
    pub tmax: Option<f64>,
    #[serde(default)]
    pub pmin: Option<f64>,
    #[serde(default)]
    pub pmax: Option<f64>,
    #[serde(default)]
    pub comment: String,
}

impl Lindemann {
    pub fn new(arrhenius_high: Arrhenius, arrhenius_low: Arrhenius) -> Self {
        Self {
            arrhenius_high,
            arrhenius_low,
            efficiencies: HashMap::new(),
            tmin: None,
            tmax: None,
            pmin: None,
            pmax: None,
            comment: String::new(),
        }
    }
}

impl KineticsCalculator for Lindemann {
    fn get_rate_coefficient(&self, t: f64, p: f64) -> Result<f64, ReactionError> {
        check_domain(t, Some(p), (self.tmin, self.tmax), (self.pmin, self.pmax))?;
        let (p_r, k_inf) = reduced_pressure(&self.arrhenius_high, &self.arrhenius_low, t, p);
        Ok(k_inf * (p_r / (1.0 + p_r)))
    }
    fn is_pressure_dependent(&self) -> bool {
        true
    }
    fn change_rate(&mut self, factor: f64) {
        self.arrhenius_high.change_rate(factor);
        self.arrhenius_low.change_rate(factor);
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn efficiencies(&self) -> Option<&HashMap<String, f64>> {
        Some(&self.efficiencies)
    }
}

/// Troe falloff: Lindemann form times the broadening factor F with
/// Fcent = (1 - alpha) exp(-T/T3) + alpha exp(-T/T1) + exp(-T2/T)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Troe {
    pub arrhenius_high: Arrhenius,
    pub arrhenius_low: Arrhenius,
    pub alpha: f64,
    pub t3: f64,
    pub t1: f64,
    #[serde(default)]
    pub t2: Option<f64>,
    #[serde(default)]
    pub efficiencies: HashMap<String, f64>,
    #[serde(default)]
    pub tmin: Option<f64>,
    #[serde(default)]
    pub tmax: Option<f64>,
    #[serde(default)]
    pub pmin: Option<f64>,
    #[serde(default)]
    pub pmax: Option<f64>,
    #[serde(default)]
    pub comment: String,
}

impl Troe {
    pub fn new(
        arrhenius_high: Arrhenius,
        arrhenius_low: Arrhenius,
        alpha: f64,
        t3: f64,
        t1: f64,
        t2: Option<f64>,
    ) -> Self {
        Self {
            arrhenius_high,
            arrhenius_low,
            alpha,
            t3,
            t1,
            t2,
            efficiencies: HashMap::new(),
            tmin: None,
            tmax: None,
            pmin: None,
            pmax: None,
            comment: String::new(),
        }
    }
    fn f_cent(&self, t: f64) -> f64 {
        let mut f_c =
            (1.0 - self.alpha) * f64::exp(-t / self.t3) + self.alpha * f64::exp(-t / self.t1);
        if let Some(t2) = self.t2 {
            f_c += f64::exp(-t2 / t);
        }
        f_c
    }
}

impl KineticsCalculator for Troe {
    fn get_rate_coefficient(&self, t: f64, p: f64) -> Result<f64, ReactionError> {
        check_domain(t, Some(p), (self.tmin, self.tmax), (self.pmin, self.pmax))?;
        let (p_r, k_inf) = reduced_pressure(&self.arrhenius_high, &self.arrhenius_low, t, p);
        let log_fc = self.f_cent(t).log10();
        let c = -0.4 - 0.67 * log_fc;
        let n = 0.75 - 1.27 * log_fc;
        let d = 0.14;
        let x = p_r.log10() + c;
        let f_1 = x / (n - d * x);
        let log_f = log_fc / (1.0 + f_1 * f_1);
        Ok(k_inf * (p_r / (1.0 + p_r)) * 10.0_f64.powf(log_f))
    }
    fn is_pressure_dependent(&self) -> bool {
        true
    }
    fn change_rate(&mut self, factor: f64) {
        self.arrhenius_high.change_rate(factor);
        self.arrhenius_low.change_rate(factor);
    }
    fn comment(&self) -> &str {
        &self.comment
    }
    fn efficiencies(&self) -> Option<&HashMap<String, f64>> {
        Some(&self.efficiencies)
    }
}

// Skill passport engine: vocabulary-driven extraction, aggregate scoring,
// per-skill verification. Everything here is a pure function over plain data;
// persistence lives in the freelancers module.

pub mod extraction;
pub mod passport;
pub mod scoring;
pub mod vocabulary;

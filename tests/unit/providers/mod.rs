/*!
 * Provider implementation tests
 */

pub mod gemini_test;

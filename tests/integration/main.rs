mod families_test;
mod probe_test;

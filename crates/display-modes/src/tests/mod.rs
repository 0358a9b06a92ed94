mod enumerator_tests;

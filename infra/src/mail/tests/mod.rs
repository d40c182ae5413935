mod logging_notifier_tests;

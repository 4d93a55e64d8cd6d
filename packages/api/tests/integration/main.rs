mod verify_email_tests;
